// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_MINIMIZE;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure for an asset chain.
///
/// Pre-processors run once per resource with that resource as context.
/// Post-processors run once per merged group, without context.
///
/// # Example
/// ```yaml
/// minimize: true
/// pre_processors:
///   - id: strip
///     impl_: comment_stripper
///     decorators: [benchmark]
/// post_processors:
///   - id: css
///     impl_: css_minifier
///     decorators: [lazy, caching]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_minimize")]
    pub minimize: bool,
    #[serde(default)]
    pub pre_processors: Vec<ProcessorConfig>,
    #[serde(default)]
    pub post_processors: Vec<ProcessorConfig>,
}

fn default_minimize() -> bool {
    DEFAULT_MINIMIZE
}

impl Config {
    /// Every processor config, pre-processors first
    pub fn processors(&self) -> impl Iterator<Item = &ProcessorConfig> {
        self.pre_processors.iter().chain(self.post_processors.iter())
    }
}

/// Configuration for a single processor.
///
/// # Fields
/// * `id` - Unique identifier across both phases
/// * `impl_` - Name of the local implementation
/// * `decorators` - Wrappers applied innermost first
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessorConfig {
    pub id: String,
    pub impl_: Option<String>,
    #[serde(default)]
    pub decorators: Vec<DecoratorKind>,
}

/// Decorators that can wrap a configured processor.
///
/// # Variants
/// * `Forwarding` - Plain pass-through
/// * `Benchmark` - Times every call
/// * `Caching` - Memoizes output by resource and input
/// * `Lazy` - Builds the processor on first use, must come first
/// * `FailSafe` - Copies input through when the processor fails
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum DecoratorKind {
    Forwarding,
    Benchmark,
    Caching,
    Lazy,
    FailSafe,
}

/// Load a config from a YAML (`.yaml`, `.yml`) or TOML (`.toml`) file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match extension.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        Some("toml") => toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        }),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Load and validate a config file
///
/// Validation checks id uniqueness and that every processor can be built.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
pre_processors:
  - id: strip
    impl_: comment_stripper
post_processors:
  - id: css
    impl_: css_minifier
    decorators: [lazy, caching, benchmark]
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(cfg.minimize);
        assert_eq!(cfg.pre_processors.len(), 1);
        assert_eq!(
            cfg.post_processors[0].decorators,
            vec![DecoratorKind::Lazy, DecoratorKind::Caching, DecoratorKind::Benchmark]
        );
        assert_eq!(cfg.processors().count(), 2);
    }

    #[test]
    fn test_load_toml_config() {
        let file = write_config(
            ".toml",
            r#"
minimize = false

[[pre_processors]]
id = "semi"
impl_ = "semicolon_appender"
decorators = ["fail_safe"]
"#,
        );

        let cfg = load_config(file.path()).unwrap();
        assert!(!cfg.minimize);
        assert_eq!(cfg.pre_processors[0].impl_.as_deref(), Some("semicolon_appender"));
        assert_eq!(cfg.pre_processors[0].decorators, vec![DecoratorKind::FailSafe]);
        assert!(cfg.post_processors.is_empty());
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let file = write_config(
            ".yaml",
            r#"
pre_processors:
  - id: strip
    impl_: comment_stripper
post_processors:
  - id: css
    impl_: css_minifier
    decorators: [lazy, benchmark]
"#,
        );

        assert!(load_and_validate_config(file.path()).is_ok());
    }

    #[test]
    fn test_load_and_validate_duplicate_ids() {
        let file = write_config(
            ".yml",
            r#"
pre_processors:
  - id: dup
    impl_: comment_stripper
post_processors:
  - id: dup
    impl_: css_minifier
"#,
        );

        let error_msg = load_and_validate_config(file.path()).unwrap_err().to_string();
        assert!(error_msg.contains("Duplicate processor ID: 'dup'"));
    }

    #[test]
    fn test_load_and_validate_unknown_implementation() {
        let file = write_config(
            ".yaml",
            r#"
post_processors:
  - id: css
    impl_: does_not_exist
"#,
        );

        let error_msg = load_and_validate_config(file.path()).unwrap_err().to_string();
        assert!(error_msg.contains("Unknown local processor implementation"));
    }

    #[test]
    fn test_load_config_errors() {
        let unsupported = write_config(".json", "{}");
        assert!(matches!(
            load_config(unsupported.path()),
            Err(ConfigError::UnsupportedFormat(_))
        ));

        let broken = write_config(".yaml", "pre_processors: [");
        assert!(matches!(load_config(broken.path()), Err(ConfigError::Yaml { .. })));

        let missing = std::env::temp_dir().join("asset-chain-missing-config.yaml");
        assert!(matches!(load_config(&missing), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_unknown_decorator_is_rejected() {
        let yaml = r#"
pre_processors:
  - id: strip
    impl_: comment_stripper
    decorators: [memoize]
"#;

        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }
}
