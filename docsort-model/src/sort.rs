use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Field a document list can be ordered by.
///
/// Named variants cover the built-in document fields. Anything else resolves
/// against the document's custom fields by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum DocumentField {
    Title,
    Status,
    PublishedAt,
    Slug,
    Description,
    Collection,
    Author,
    Custom(String),
}

impl DocumentField {
    /// Wire name used by document JSON and settings files.
    pub fn as_str(&self) -> &str {
        match self {
            DocumentField::Title => "title",
            DocumentField::Status => "status",
            DocumentField::PublishedAt => "publishedAt",
            DocumentField::Slug => "slug",
            DocumentField::Description => "description",
            DocumentField::Collection => "collection",
            DocumentField::Author => "author",
            DocumentField::Custom(name) => name,
        }
    }

    pub fn custom(name: impl Into<String>) -> Result<Self> {
        name.into().parse()
    }
}

impl FromStr for DocumentField {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self> {
        let name = raw.trim();
        let field = match name {
            "" => return Err(ModelError::InvalidField(raw.to_string())),
            "title" => DocumentField::Title,
            "status" => DocumentField::Status,
            "publishedAt" | "published_at" => DocumentField::PublishedAt,
            "slug" => DocumentField::Slug,
            "description" => DocumentField::Description,
            "collection" => DocumentField::Collection,
            "author" => DocumentField::Author,
            other => DocumentField::Custom(other.to_string()),
        };
        Ok(field)
    }
}

impl TryFrom<String> for DocumentField {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DocumentField> for String {
    fn from(field: DocumentField) -> Self {
        match field {
            DocumentField::Custom(name) => name,
            named => named.as_str().to_string(),
        }
    }
}

impl fmt::Display for DocumentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "asc"))]
    Ascending,
    #[cfg_attr(feature = "serde", serde(alias = "desc"))]
    Descending,
}

impl SortDirection {
    pub const fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub const fn is_descending(self) -> bool {
        matches!(self, SortDirection::Descending)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortDirection::Ascending),
            "descending" | "desc" => Ok(SortDirection::Descending),
            _ => Err(ModelError::InvalidDirection(raw.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Which field to order by, and in which direction.
///
/// Immutable by convention: callers build a new value to change the order,
/// and cached views compare configs by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortConfig {
    pub key: DocumentField,
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: DocumentField, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: DocumentField) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: DocumentField) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// Same key, opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.key.clone(), self.direction.reversed())
    }
}

impl Default for SortConfig {
    /// Newest publications first.
    fn default() -> Self {
        Self::descending(DocumentField::PublishedAt)
    }
}

impl fmt::Display for SortConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_builtin_and_custom_fields() {
        assert_eq!("title".parse(), Ok(DocumentField::Title));
        assert_eq!("publishedAt".parse(), Ok(DocumentField::PublishedAt));
        assert_eq!("published_at".parse(), Ok(DocumentField::PublishedAt));
        assert_eq!(
            " readingTime ".parse(),
            Ok(DocumentField::Custom("readingTime".into()))
        );
        assert_eq!(
            "  ".parse::<DocumentField>(),
            Err(ModelError::InvalidField("  ".into()))
        );
    }

    #[test]
    fn field_display_round_trips_through_parse() {
        for field in [
            DocumentField::Title,
            DocumentField::PublishedAt,
            DocumentField::Custom("order".into()),
        ] {
            assert_eq!(field.to_string().parse(), Ok(field));
        }
    }

    #[test]
    fn parses_direction_aliases() {
        assert_eq!("ASC".parse(), Ok(SortDirection::Ascending));
        assert_eq!("descending".parse(), Ok(SortDirection::Descending));
        assert!(matches!(
            "sideways".parse::<SortDirection>(),
            Err(ModelError::InvalidDirection(_))
        ));
    }

    #[test]
    fn reversing_flips_only_direction() {
        let config = SortConfig::ascending(DocumentField::Title);
        let reversed = config.reversed();

        assert_eq!(reversed.key, DocumentField::Title);
        assert_eq!(reversed.direction, SortDirection::Descending);
        assert_eq!(reversed.reversed(), config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_wire_names() {
        let config = SortConfig::descending(DocumentField::PublishedAt);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"key":"publishedAt","direction":"descending"}"#);

        let parsed: SortConfig = serde_json::from_str(r#"{"key":"readingTime"}"#).unwrap();
        assert_eq!(parsed.key, DocumentField::Custom("readingTime".into()));
        assert_eq!(parsed.direction, SortDirection::Ascending);

        let short_direction = r#"{"key":"title","direction":"desc"}"#;
        let parsed: SortConfig = serde_json::from_str(short_direction).unwrap();
        assert_eq!(parsed.direction, SortDirection::Descending);

        assert!(serde_json::from_str::<SortConfig>(r#"{"key":""}"#).is_err());
    }
}
