use crate::error::ConfigLoadError;
use docsort_model::{DocumentField, SortConfig, SortDirection};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Path to a TOML or JSON settings file.
pub const CONFIG_PATH_ENV: &str = "DOCSORT_CONFIG_PATH";
/// Inline JSON settings.
pub const CONFIG_JSON_ENV: &str = "DOCSORT_CONFIG_JSON";

const DEFAULT_FILE_CANDIDATES: &[&str] = &["docsort.toml", "docsort.json", "config/docsort.toml"];

/// Source that produced the sort settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortSettingsSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Default orderings for document listings.
///
/// `default_sort` applies to every listing unless `collections` names an
/// override for the collection being shown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SortSettings {
    /// Order used when a listing has no override. Newest publications first
    /// unless configured otherwise.
    pub default_sort: SortConfig,
    /// Per-collection overrides keyed by collection name, e.g. a `docs`
    /// collection that reads best alphabetically.
    pub collections: BTreeMap<String, SortConfig>,
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            default_sort: SortConfig::default(),
            collections: BTreeMap::new(),
        }
    }
}

impl SortSettings {
    pub fn for_collection(&self, name: &str) -> SortConfig {
        self.collections
            .get(name)
            .cloned()
            .unwrap_or_else(|| self.default_sort.clone())
    }

    /// Settings for `collection`, with explicit key/direction taking precedence.
    pub fn resolve(
        &self,
        collection: Option<&str>,
        key: Option<DocumentField>,
        direction: Option<SortDirection>,
    ) -> SortConfig {
        let base = match collection {
            Some(name) => self.for_collection(name),
            None => self.default_sort.clone(),
        };

        SortConfig {
            key: key.unwrap_or(base.key),
            direction: direction.unwrap_or(base.direction),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if let Some(name) = self.collections.keys().find(|name| name.trim().is_empty()) {
            return Err(ConfigLoadError::Invalid(format!(
                "collection override names must not be empty (got {name:?})"
            )));
        }
        Ok(())
    }

    /// Load settings using environment variables.
    /// Evaluation order:
    /// 1) `$DOCSORT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$DOCSORT_CONFIG_JSON` (inline JSON),
    /// 3) the first default file found in the working directory,
    /// 4) defaults.
    ///
    /// A `.env` file is read first when present.
    pub fn load_from_env() -> Result<(Self, SortSettingsSource), ConfigLoadError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env file");
        }

        Self::load_from_sources(|name| env::var(name).ok(), Path::new("."))
    }

    /// Same precedence as [`SortSettings::load_from_env`], reading variables
    /// through `lookup` and default files relative to `base_dir`.
    pub fn load_from_sources(
        lookup: impl Fn(&str) -> Option<String>,
        base_dir: &Path,
    ) -> Result<(Self, SortSettingsSource), ConfigLoadError> {
        // Blank variables count as unset.
        let non_blank = |name: &str| lookup(name).filter(|raw| !raw.trim().is_empty());

        let (settings, source) = if let Some(path) = non_blank(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path);
            let settings = Self::load_from_file(&path)?;
            (settings, SortSettingsSource::EnvPath(path))
        } else if let Some(raw) = non_blank(CONFIG_JSON_ENV) {
            let settings = Self::parse_json(&raw, CONFIG_JSON_ENV)?;
            (settings, SortSettingsSource::EnvInline)
        } else if let Some(path) = Self::find_default_file(base_dir) {
            let settings = Self::load_from_file(&path)?;
            (settings, SortSettingsSource::File(path))
        } else {
            (Self::default(), SortSettingsSource::Default)
        };

        settings.validate()?;
        Ok((settings, source))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &origin),
            Some("toml") | Some("tml") => Self::parse_toml(&contents, &origin),
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> Result<Self, ConfigLoadError> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err: toml::de::Error| {
            serde_json::from_str(contents).map_err(|json_err| ConfigLoadError::Unrecognized {
                origin: origin.to_string(),
                toml: toml_err.to_string(),
                json: json_err.to_string(),
            })
        })
    }

    pub fn parse_toml(raw: &str, origin: &str) -> Result<Self, ConfigLoadError> {
        toml::from_str(raw).map_err(|source| ConfigLoadError::Toml {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn parse_json(raw: &str, origin: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
            origin: origin.to_string(),
            source,
        })
    }

    fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
        DEFAULT_FILE_CANDIDATES
            .iter()
            .map(|candidate| base_dir.join(candidate))
            .find(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_newest_first() {
        let settings = SortSettings::default();

        assert_eq!(settings.default_sort.key, DocumentField::PublishedAt);
        assert_eq!(settings.default_sort.direction, SortDirection::Descending);
        assert_eq!(settings.for_collection("posts"), settings.default_sort);
    }

    #[test]
    fn collection_override_wins() {
        let raw = r#"
            [collections.docs]
            key = "title"
        "#;
        let settings = SortSettings::parse_toml(raw, "inline").unwrap();

        assert_eq!(
            settings.for_collection("docs"),
            SortConfig::ascending(DocumentField::Title)
        );
        assert_eq!(settings.for_collection("posts"), SortConfig::default());
    }

    #[test]
    fn explicit_flags_override_settings() {
        let by_title = SortConfig::ascending(DocumentField::Title);
        let mut settings = SortSettings::default();
        settings.collections.insert("docs".into(), by_title);

        let newest = Some(SortDirection::Descending);
        let resolved = settings.resolve(Some("docs"), None, newest);
        assert_eq!(resolved, SortConfig::descending(DocumentField::Title));

        let resolved = settings.resolve(None, Some(DocumentField::Status), None);
        assert_eq!(resolved, SortConfig::descending(DocumentField::Status));
    }

    #[test]
    fn rejects_blank_collection_names() {
        let raw = r#"{"collections": {" ": {"key": "title"}}}"#;
        let settings = SortSettings::parse_json(raw, "inline").unwrap();

        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(_)));
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let raw = r#"{"default_sort": {"key": "status", "direction": "asc"}}"#;
        let settings = SortSettings::parse_from_str(raw, "inline").unwrap();
        assert_eq!(
            settings.default_sort,
            SortConfig::ascending(DocumentField::Status)
        );

        let err = SortSettings::parse_from_str("default_sort = [", "inline");
        assert!(matches!(err, Err(ConfigLoadError::Unrecognized { .. })));
    }
}
