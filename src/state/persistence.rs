use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Meal;

/// Load meals from a JSON file.
///
/// Deduplicates by id (last occurrence wins).
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<Meal>> {
    let content = fs::read_to_string(path)?;
    let meals: Vec<Meal> = serde_json::from_str(&content)?;

    let mut seen: BTreeMap<u32, Meal> = BTreeMap::new();
    for meal in meals {
        seen.insert(meal.id, meal);
    }

    Ok(seen.into_values().collect())
}

/// Like [`load_meals`], but a missing file is an empty store.
pub fn load_meals_or_empty<P: AsRef<Path>>(path: P) -> Result<Vec<Meal>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "meal file not found, starting empty");
        return Ok(Vec::new());
    }
    load_meals(path)
}

/// Save meals to a JSON file, ordered by id.
pub fn save_meals<P: AsRef<Path>>(path: P, meals: &[Meal]) -> Result<()> {
    let mut sorted: Vec<&Meal> = meals.iter().collect();
    sorted.sort_by_key(|m| m.id);

    let json = serde_json::to_string_pretty(&sorted)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"id": 1, "meal": "Pizza", "cuisine": "Italian", "price": 12.0, "difficulty": "LOW", "deleted": false, "battles": 4, "wins": 3}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let meals = load_meals(file.path()).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Pizza");
        assert_eq!(meals[0].difficulty, Difficulty::Low);
        assert_eq!(meals[0].wins, 3);

        let out_file = NamedTempFile::new().unwrap();
        save_meals(out_file.path(), &meals).unwrap();

        let reloaded = load_meals(out_file.path()).unwrap();
        assert_eq!(reloaded, meals);
    }

    #[test]
    fn test_counters_default_to_zero() {
        let json = r#"[{"id": 7, "meal": "Sushi", "cuisine": "Japanese", "price": 30.0, "difficulty": "HIGH"}]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let meals = load_meals(file.path()).unwrap();
        assert!(!meals[0].deleted);
        assert_eq!((meals[0].battles, meals[0].wins), (0, 0));
    }

    #[test]
    fn test_deduplication() {
        let json = r#"[
            {"id": 1, "meal": "Pizza", "cuisine": "Italian", "price": 12.0, "difficulty": "LOW", "wins": 1, "battles": 1},
            {"id": 1, "meal": "Pizza", "cuisine": "Italian", "price": 12.0, "difficulty": "LOW", "wins": 2, "battles": 5}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let meals = load_meals(file.path()).unwrap();
        assert_eq!(meals.len(), 1);
        // Last occurrence wins
        assert_eq!(meals[0].battles, 5);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let meals = load_meals_or_empty(dir.path().join("meals.json")).unwrap();
        assert!(meals.is_empty());
    }

    #[test]
    fn test_invalid_difficulty_rejected() {
        let json = r#"[{"id": 1, "meal": "Pizza", "cuisine": "Italian", "price": 12.0, "difficulty": "OTHER"}]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(load_meals(file.path()).is_err());
    }
}
