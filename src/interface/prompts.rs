use dialoguer::{Confirm, Select};

use crate::error::Result;

/// Ask which of the suggested names the user meant.
///
/// Returns `None` when the user rejects every suggestion.
pub fn prompt_did_you_mean(query: &str, suggestions: &[&str]) -> Result<Option<String>> {
    match suggestions {
        [] => {
            println!("No matching meal found for '{}'", query);
            Ok(None)
        }
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only))
                .default(true)
                .interact()?;
            Ok(confirm.then(|| only.to_string()))
        }
        many => {
            let mut options: Vec<String> = many.iter().map(|s| s.to_string()).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok((selection < many.len()).then(|| many[selection].to_string()))
        }
    }
}
