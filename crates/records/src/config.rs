use std::fmt;

/// Production API host of the record store.
pub const DEFAULT_API_URL: &str = "https://api.airtable.com";

/// Credentials and table coordinates for the record store.
///
/// Built once at startup and shared by every request.
#[derive(Clone)]
pub struct RecordStoreConfig {
    /// Personal access token sent as a bearer credential.
    pub access_token: String,
    /// Base (database) identifier, e.g. `appXXXXXXXXXXXXXX`.
    pub base_id: String,
    /// Table identifier or name within the base.
    pub table_id: String,
    /// Scheme and host of the API. Not read from the environment.
    pub api_url: String,
}

/// Error loading [`RecordStoreConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

impl RecordStoreConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                          | Required |
    /// |----------------------------------|----------|
    /// | `AIRTABLE_PERSONAL_ACCESS_TOKEN` | yes      |
    /// | `AIRTABLE_BASE_ID`               | yes      |
    /// | `AIRTABLE_TABLE_ID`              | yes      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. Empty values count
    /// as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            access_token: required("AIRTABLE_PERSONAL_ACCESS_TOKEN")?,
            base_id: required("AIRTABLE_BASE_ID")?,
            table_id: required("AIRTABLE_TABLE_ID")?,
            api_url: DEFAULT_API_URL.to_string(),
        })
    }

    /// Point the client at a different API host.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl fmt::Debug for RecordStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStoreConfig")
            .field("access_token", &"<redacted>")
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            ("AIRTABLE_PERSONAL_ACCESS_TOKEN", "pat.secret"),
            ("AIRTABLE_BASE_ID", "appBase"),
            ("AIRTABLE_TABLE_ID", "tblLeads"),
        ]
    }

    #[test]
    fn loads_all_required_values() {
        let config = RecordStoreConfig::from_lookup(lookup(&complete())).unwrap();
        assert_eq!(config.access_token, "pat.secret");
        assert_eq!(config.base_id, "appBase");
        assert_eq!(config.table_id, "tblLeads");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn missing_value_is_reported_by_name() {
        let pairs: Vec<_> = complete()
            .into_iter()
            .filter(|(k, _)| *k != "AIRTABLE_BASE_ID")
            .collect();
        let err = RecordStoreConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert_matches!(err, ConfigError::Missing("AIRTABLE_BASE_ID"));
        assert_eq!(err.to_string(), "AIRTABLE_BASE_ID must be set");
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let mut pairs = complete();
        pairs[2] = ("AIRTABLE_TABLE_ID", "   ");
        let err = RecordStoreConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert_matches!(err, ConfigError::Missing("AIRTABLE_TABLE_ID"));
    }

    #[test]
    fn api_url_override_drops_trailing_slash() {
        let config = RecordStoreConfig::from_lookup(lookup(&complete()))
            .unwrap()
            .with_api_url("http://127.0.0.1:9000/");
        assert_eq!(config.api_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = RecordStoreConfig::from_lookup(lookup(&complete())).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("pat.secret"));
        assert!(debug.contains("<redacted>"));
    }
}
