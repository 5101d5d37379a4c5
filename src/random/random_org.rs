use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{MealError, Result};
use crate::random::RandomSource;

/// random.org endpoint returning one two-decimal fraction as plain text.
pub const RANDOM_ORG_URL: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";

/// Default request timeout for random.org.
pub const RANDOM_ORG_TIMEOUT: Duration = Duration::from_secs(5);

/// Endpoint and timeout for the random.org client.
#[derive(Debug, Clone)]
pub struct RandomOrgConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for RandomOrgConfig {
    fn default() -> Self {
        Self {
            url: RANDOM_ORG_URL.to_string(),
            timeout: RANDOM_ORG_TIMEOUT,
        }
    }
}

/// Blocking random.org client. One HTTP request per draw, no retries.
pub struct RandomOrgSource {
    client: Client,
    config: RandomOrgConfig,
}

impl RandomOrgSource {
    pub fn new(config: RandomOrgConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MealError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn fetch_body(&self) -> Result<String> {
        self.client
            .get(&self.config.url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(map_request_error)
    }
}

impl RandomSource for RandomOrgSource {
    fn get_random(&self) -> Result<f64> {
        tracing::debug!(url = %self.config.url, "requesting random number");
        let body = self.fetch_body()?;
        let value = parse_random_response(&body)?;
        tracing::debug!(value, "received random number from random.org");
        Ok(value)
    }
}

fn map_request_error(err: reqwest::Error) -> MealError {
    if err.is_timeout() {
        tracing::error!("request to random.org timed out");
        MealError::Timeout
    } else {
        tracing::error!(error = %err, "request to random.org failed");
        MealError::Transport(err.to_string())
    }
}

/// Parse a plain-text random.org body into a draw in `[0, 1)`.
pub fn parse_random_response(body: &str) -> Result<f64> {
    let text = body.trim();
    match text.parse::<f64>() {
        Ok(value) if (0.0..1.0).contains(&value) => Ok(value),
        _ => Err(MealError::MalformedResponse(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_random_response("0.42").unwrap(), 0.42);
        assert_eq!(parse_random_response("0.07\n").unwrap(), 0.07);
        assert_eq!(parse_random_response("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_random_response("invalid_response").unwrap_err();
        assert!(matches!(err, MealError::MalformedResponse(_)));
        assert_eq!(
            err.to_string(),
            "Invalid response from random.org: invalid_response"
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(parse_random_response("1.0").is_err());
        assert!(parse_random_response("-0.1").is_err());
        assert!(parse_random_response("NaN").is_err());
        assert!(parse_random_response("").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = RandomOrgConfig::default();
        assert_eq!(
            config.url,
            "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new"
        );
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
