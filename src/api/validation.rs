// src/api/validation.rs

use crate::api::error::ApiError;
use crate::generation::{CodeLanguage, ExplanationLevel};

/// Reject blank code blocks before any model call is made.
pub fn require_code(code: &str) -> Result<(), ApiError> {
    if code.trim().is_empty() {
        return Err(ApiError::Validation(
            "Code block to generate from cannot be empty".into(),
        ));
    }
    Ok(())
}

/// `10..=50` in steps of ten, mapped to an explanation level.
pub fn explanation_level(value: u8) -> Result<ExplanationLevel, ApiError> {
    ExplanationLevel::from_percent_scale(value).ok_or_else(|| {
        ApiError::Validation(format!(
            "explanation_complexity must be one of 10, 20, 30, 40, 50 (got {value})"
        ))
    })
}

/// A blank framework means "no framework". Anything else must be one the
/// language supports.
pub fn framework(
    language: CodeLanguage,
    requested: Option<String>,
) -> Result<Option<String>, ApiError> {
    let Some(requested) = requested.filter(|f| !f.trim().is_empty()) else {
        return Ok(None);
    };

    if language.supports_framework(requested.trim()) {
        Ok(Some(requested.trim().to_string()))
    } else {
        let valid = language.documentation_frameworks();
        let hint = if valid.is_empty() {
            "none are supported".to_string()
        } else {
            format!("expected one of: {}", valid.join(", "))
        };
        Err(ApiError::Validation(format!(
            "'{requested}' is not a valid documentation framework for {language}; {hint}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_code() {
        assert!(require_code("x = 1").is_ok());
        assert!(require_code("").is_err());
        assert!(require_code("  \n\t").is_err());
    }

    #[test]
    fn test_explanation_level() {
        assert_eq!(explanation_level(30).unwrap().get(), 3);
        assert!(explanation_level(5).is_err());
        assert!(explanation_level(55).is_err());
    }

    #[test]
    fn test_framework_case_insensitive() {
        let chosen = framework(CodeLanguage::Python, Some("SPHINX".into())).unwrap();
        assert_eq!(chosen.as_deref(), Some("SPHINX"));
    }

    #[test]
    fn test_framework_blank_is_none() {
        assert!(framework(CodeLanguage::Java, None).unwrap().is_none());
        assert!(framework(CodeLanguage::Java, Some("  ".into())).unwrap().is_none());
    }

    #[test]
    fn test_framework_wrong_language() {
        assert!(framework(CodeLanguage::Java, Some("jsdoc".into())).is_err());
        match framework(CodeLanguage::Cpp, Some("doxygen".into())) {
            Err(ApiError::Validation(message)) => assert!(message.contains("none are supported")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
