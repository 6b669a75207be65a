use std::fmt;
use std::str::FromStr;
use shuttle_runtime::SecretStore;
use thiserror::Error;
use tracing::info;

pub const TABLE_KEY: &str = "VOTES_TABLE";
pub const SCAN_PAGE_SIZE_KEY: &str = "SCAN_PAGE_SIZE";
pub const DELETE_BATCH_SIZE_KEY: &str = "DELETE_BATCH_SIZE";

pub const DEFAULT_SCAN_PAGE_SIZE: usize = 1000;
pub const DEFAULT_DELETE_BATCH_SIZE: usize = 25;
const MAX_IDENTIFIER_LENGTH: usize = 63;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// A table identifier that is safe to splice into SQL text.
///
/// Either `table` or `schema.table`, each part an unquoted identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

    starts_ok
        && part.len() <= MAX_IDENTIFIER_LENGTH
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl FromStr for TableName {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() > 2 {
            return Err("at most one schema qualifier is allowed".into());
        }
        if let Some(bad) = parts.iter().find(|part| !is_identifier(part)) {
            return Err(format!("{bad:?} is not a plain SQL identifier"));
        }
        Ok(Self(raw.to_string()))
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table: TableName,
    pub scan_page_size: usize,
    pub delete_batch_size: usize,
}

impl Config {
    pub fn from_secrets(secrets: &SecretStore) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| secrets.get(key))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_table = lookup(TABLE_KEY)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(TABLE_KEY))?;
        let table = raw_table.trim().parse::<TableName>().map_err(|reason| ConfigError::Invalid {
            key: TABLE_KEY,
            value: raw_table.clone(),
            reason,
        })?;

        Ok(Self {
            table,
            scan_page_size: positive(&lookup, SCAN_PAGE_SIZE_KEY, DEFAULT_SCAN_PAGE_SIZE)?,
            delete_batch_size: positive(&lookup, DELETE_BATCH_SIZE_KEY, DEFAULT_DELETE_BATCH_SIZE)?,
        })
    }
}

fn positive(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    let Some(value) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };

    let invalid = |reason: String| ConfigError::Invalid {
        key,
        value: value.clone(),
        reason,
    };

    match value.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be at least 1".into())),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_table_is_set() {
        let config = load(&[("VOTES_TABLE", "survey_votes")]).unwrap();
        assert_eq!(config.table.as_str(), "survey_votes");
        assert_eq!(config.scan_page_size, DEFAULT_SCAN_PAGE_SIZE);
        assert_eq!(config.delete_batch_size, DEFAULT_DELETE_BATCH_SIZE);
    }

    #[test]
    fn table_is_required() {
        assert_eq!(load(&[]), Err(ConfigError::Missing(TABLE_KEY)));
        assert_eq!(load(&[("VOTES_TABLE", "  ")]), Err(ConfigError::Missing(TABLE_KEY)));
    }

    #[test]
    fn table_must_be_an_identifier() {
        assert!(load(&[("VOTES_TABLE", "public.survey_votes")]).is_ok());
        for bad in ["votes; DROP TABLE x", "1votes", "a.b.c", "vo-tes", "\"votes\"", "public."] {
            assert!(
                matches!(load(&[("VOTES_TABLE", bad)]), Err(ConfigError::Invalid { key: TABLE_KEY, .. })),
                "{bad} should be rejected"
            );
        }
        let long = "v".repeat(64);
        assert!(load(&[("VOTES_TABLE", long.as_str())]).is_err());
    }

    #[test]
    fn sizes_must_be_positive_integers() {
        let config = load(&[
            ("VOTES_TABLE", "votes"),
            ("SCAN_PAGE_SIZE", "50"),
            ("DELETE_BATCH_SIZE", " 10 "),
        ])
        .unwrap();
        assert_eq!(config.scan_page_size, 50);
        assert_eq!(config.delete_batch_size, 10);

        assert!(load(&[("VOTES_TABLE", "votes"), ("SCAN_PAGE_SIZE", "0")]).is_err());
        assert!(load(&[("VOTES_TABLE", "votes"), ("DELETE_BATCH_SIZE", "lots")]).is_err());
    }
}
