use crate::utils::error::{PairSumError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.display().to_string();

    if display.is_empty() {
        return Err(PairSumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display,
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(PairSumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display,
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PairSumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_optional_non_empty(field_name: &str, value: &Option<String>) -> Result<()> {
    match value {
        Some(v) => validate_non_empty_string(field_name, v),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("prompts.list", "Numbers: ").is_ok());
        assert!(validate_non_empty_string("prompts.list", "").is_err());
        assert!(validate_non_empty_string("prompts.list", "   ").is_err());
    }

    #[test]
    fn test_validate_optional_non_empty() {
        assert!(validate_optional_non_empty("prompts.target", &None).is_ok());
        assert!(validate_optional_non_empty("prompts.target", &Some("T: ".into())).is_ok());
        assert!(validate_optional_non_empty("prompts.target", &Some("\t".into())).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", Path::new("pair-sum.toml")).is_ok());
        assert!(validate_path("config", Path::new("")).is_err());
    }
}
