use serde::{Deserialize, Serialize};

use crate::article::error::ArticleError;

/// A short text article as submitted by clients.
///
/// The identifier travels as a string on the wire but must parse as a base-10
/// integer, which is the key the store files it under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub date: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl Article {
    /// Numeric key for this article.
    pub fn key(&self) -> Result<i64, ArticleError> {
        parse_id(&self.id)
    }
}

/// Parse an identifier the way integers are parsed everywhere else: optional
/// sign, decimal digits, no surrounding whitespace.
pub fn parse_id(raw: &str) -> Result<i64, ArticleError> {
    Ok(raw.parse::<i64>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: "test title".to_string(),
            date: "2022-01-01".to_string(),
            body: "test body".to_string(),
            tags: vec!["Test".to_string()],
        }
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("55").unwrap(), 55);
        assert_eq!(parse_id("+7").unwrap(), 7);
        assert_eq!(parse_id("-3").unwrap(), -3);
        assert!(parse_id("").is_err());
        assert!(parse_id(" 1").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("99999999999999999999").is_err());
    }

    #[test]
    fn test_key_uses_numeric_value() {
        assert_eq!(article("007").key().unwrap(), 7);
        assert!(matches!(
            article("seven").key(),
            Err(ArticleError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let json = r#"{"id":"1","title":"t","date":"2022-01-01","body":"b","tags":[],"author":"x"}"#;
        assert!(serde_json::from_str::<Article>(json).is_err());
    }

    #[test]
    fn test_requires_every_field() {
        let json = r#"{"id":"1","title":"t","date":"2022-01-01","tags":[]}"#;
        assert!(serde_json::from_str::<Article>(json).is_err());
    }

    #[test]
    fn test_serializes_in_field_order() {
        let json = serde_json::to_string(&article("1")).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1","title":"test title","date":"2022-01-01","body":"test body","tags":["Test"]}"#
        );
    }
}
