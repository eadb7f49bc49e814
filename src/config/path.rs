//! Dotted path parsing.
//!
//! A path such as `database.drivers.mysql.host` names a root tree (`database`)
//! followed by the keys to walk inside it. Every segment starts with an ASCII
//! letter and continues with letters or digits. At least one key
//! is required; a bare root never addresses a value.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::ConfigError;

const SEGMENT: &str = "[A-Za-z][A-Za-z0-9]*";

static PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"^{SEGMENT}(?:\.{SEGMENT})+$")));

static SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| compile(&format!("^{SEGMENT}$")));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("segment pattern is valid")
}

/// A validated path split into its root name and keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPath<'a> {
    root: &'a str,
    keys: Vec<&'a str>,
}

impl<'a> ConfigPath<'a> {
    /// Validates `path` and splits it on `.`.
    ///
    /// Returns [`ConfigError::InvalidPath`] for the empty string, a path without
    /// keys, or any segment outside the grammar.
    pub fn parse(path: &'a str) -> Result<Self, ConfigError> {
        if !Self::is_valid(path) {
            return Err(ConfigError::InvalidPath(path.to_string()));
        }

        let mut segments = path.split('.');
        let root = segments
            .next()
            .ok_or_else(|| ConfigError::InvalidPath(path.to_string()))?;

        Ok(Self {
            root,
            keys: segments.collect(),
        })
    }

    /// Whether `path` would parse.
    pub fn is_valid(path: &str) -> bool {
        !path.is_empty() && PATH_RE.is_match(path)
    }

    /// The first segment, naming a registered tree.
    pub fn root(&self) -> &'a str {
        self.root
    }

    /// The remaining segments, outermost first. Never empty.
    pub fn keys(&self) -> &[&'a str] {
        &self.keys
    }
}

impl fmt::Display for ConfigPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root)?;
        for key in &self.keys {
            write!(f, ".{key}")?;
        }
        Ok(())
    }
}

/// Checks a single segment, e.g. a root name about to be registered.
pub fn is_valid_segment(segment: &str) -> bool {
    SEGMENT_RE.is_match(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_root_and_keys() {
        let path = ConfigPath::parse("database.drivers.mysql.host").unwrap();
        assert_eq!(path.root(), "database");
        assert_eq!(path.keys(), &["drivers", "mysql", "host"]);
    }

    #[test]
    fn test_parse_single_key() {
        let path = ConfigPath::parse("database.encoding").unwrap();
        assert_eq!(path.root(), "database");
        assert_eq!(path.keys(), &["encoding"]);
    }

    #[test]
    fn test_alphanumeric_segments() {
        let path = ConfigPath::parse("app123.baseSite2").unwrap();
        assert_eq!(path.root(), "app123");
        assert_eq!(path.keys(), &["baseSite2"]);

        assert!(ConfigPath::is_valid("database.alfanum123"));
        assert!(ConfigPath::is_valid("a1.b2.c3"));
    }

    #[test]
    fn test_rejects_empty_path() {
        assert!(matches!(
            ConfigPath::parse(""),
            Err(ConfigError::InvalidPath(p)) if p.is_empty()
        ));
    }

    #[test]
    fn test_rejects_bare_root() {
        assert!(ConfigPath::parse("database").is_err());
        assert!(ConfigPath::parse("database.").is_err());
    }

    #[test]
    fn test_rejects_leading_digit() {
        assert!(ConfigPath::parse("123.er3.124").is_err());
        assert!(ConfigPath::parse("database.1st").is_err());
    }

    #[test]
    fn test_rejects_malformed_separators() {
        for path in [".database.host", "database..host", "database.host.", "database host.x"] {
            assert!(ConfigPath::parse(path).is_err(), "{path} should be invalid");
        }
    }

    #[test]
    fn test_rejects_non_alphanumeric_segments() {
        for path in [
            "data-base.host",
            "database.ho$t",
            "database.hóst",
            "database.drivers/mysql",
            "database.db_name",
            "db_config.encoding",
        ] {
            assert!(ConfigPath::parse(path).is_err(), "{path} should be invalid");
        }
    }

    #[test]
    fn test_display_round_trips_text() {
        let raw = "database.drivers.mysql";
        assert_eq!(ConfigPath::parse(raw).unwrap().to_string(), raw);
    }

    #[test]
    fn test_is_valid_segment() {
        assert!(is_valid_segment("network"));
        assert!(is_valid_segment("app123"));
        assert!(!is_valid_segment("123app"));
        assert!(!is_valid_segment("net.work"));
        assert!(!is_valid_segment("sockets_config"));
        assert!(!is_valid_segment(""));
    }
}
