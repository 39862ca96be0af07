use crate::errors::{ClassBuilderError, Result};
use crate::resolver::ClassResolver;
use crate::variants::{VariantsConfig, CLASS_KEY_ALIAS, CLASS_NAME_KEY};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Named component configurations loaded from a style file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Component name -> class configuration
    pub components: IndexMap<String, VariantsConfig>,
}

/// Severity of a configuration diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A configuration mistake that resolution would silently tolerate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub component: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}: {}", label, self.component, self.message)
    }
}

impl StyleConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = read_config(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = read_config(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            Some("json") => Self::from_json_file(path)?,
            _ => {
                return Err(ClassBuilderError::ConfigError {
                    message: format!(
                        "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                        path.display()
                    ),
                })
            }
        };

        tracing::debug!(
            path = %path.display(),
            components = config.components.len(),
            "loaded style config"
        );
        Ok(config)
    }

    /// Merge with another configuration; same-named components are replaced
    pub fn merge(mut self, other: Self) -> Self {
        for (name, component) in other.components {
            self.components.insert(name, component);
        }
        self
    }

    pub fn component(&self, name: &str) -> Result<&VariantsConfig> {
        self.components
            .get(name)
            .ok_or_else(|| ClassBuilderError::UnknownComponent(name.to_string()))
    }

    pub fn resolver(&self, name: &str) -> Result<ClassResolver> {
        self.component(name).map(|config| ClassResolver::new(config.clone()))
    }

    /// Report mistakes the resolver would silently tolerate
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for (name, component) in &self.components {
            check_component(name, component, &mut diagnostics);
        }
        diagnostics
    }

    /// Fail on the first error-level diagnostic
    pub fn validate(&self) -> Result<()> {
        match self
            .diagnostics()
            .into_iter()
            .find(|diagnostic| diagnostic.severity == Severity::Error)
        {
            Some(diagnostic) => Err(ClassBuilderError::ConfigError {
                message: diagnostic.to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ClassBuilderError::ConfigError {
        message: format!("Failed to read config file {}: {}", path.display(), e),
    })
}

fn check_component(component: &str, config: &VariantsConfig, out: &mut Vec<Diagnostic>) {
    let mut report = |severity, message: String| {
        out.push(Diagnostic {
            severity,
            component: component.to_string(),
            message,
        })
    };

    for name in config.variants.keys() {
        if name == CLASS_NAME_KEY || name == CLASS_KEY_ALIAS {
            report(
                Severity::Error,
                format!("variant '{}' collides with the reserved extra-class key", name),
            );
        }
    }

    for (name, value) in &config.default_variants {
        match config.variants.get(name) {
            None => report(
                Severity::Warning,
                format!("default for undeclared variant '{}'", name),
            ),
            Some(group) if !group.contains_key(value.as_str()) => report(
                Severity::Warning,
                format!("default '{}' of variant '{}' has no class mapping", value, name),
            ),
            Some(_) => {}
        }
    }

    for (index, rule) in config.compound_variants.iter().enumerate() {
        for (name, value) in &rule.conditions {
            match config.variants.get(name) {
                None => report(
                    Severity::Warning,
                    format!("compound rule #{} constrains undeclared variant '{}'", index, name),
                ),
                Some(group) if !group.contains_key(value.as_str()) => report(
                    Severity::Warning,
                    format!(
                        "compound rule #{} requires '{}' of variant '{}', which has no class mapping",
                        index, value, name
                    ),
                ),
                Some(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{CompoundVariant, Selection};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BUTTON_YAML: &str = r##"
components:
  button:
    base: btn
    variants:
      size:
        small: sm
        large: lg
      color:
        red: red
        blue: blue
    defaultVariants:
      color: red
    compoundVariants:
      - color: blue
        className: compound
"##;

    #[test]
    fn test_yaml_config_loading() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(BUTTON_YAML.as_bytes()).unwrap();

        let config = StyleConfig::from_file(file.path()).unwrap();
        let button = config.component("button").unwrap();
        assert_eq!(button.base.as_deref(), Some("btn"));
        assert_eq!(button.compound_variants.len(), 1);

        let resolver = config.resolver("button").unwrap();
        assert_eq!(resolver.resolve(None), "btn red");
        assert_eq!(
            resolver.resolve(Some(&Selection::new().with("color", "blue"))),
            "btn blue compound"
        );
    }

    #[test]
    fn test_json_config_loading() {
        let json_content = r##"{
  "components": {
    "badge": {
      "base": "badge",
      "variants": { "tone": { "muted": "text-gray-500" } }
    }
  }
}"##;

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json_content.as_bytes()).unwrap();

        let config = StyleConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.components.len(), 1);
        assert!(config.component("badge").unwrap().variants.contains_key("tone"));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = NamedTempFile::with_suffix(".toml").unwrap();
        let err = StyleConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported config file format"));
    }

    #[test]
    fn test_malformed_files_report_parser_errors() {
        let yaml = StyleConfig::from_yaml_str("components: [not, a, map]").unwrap_err();
        assert!(matches!(yaml, ClassBuilderError::Yaml(_)));
        assert!(yaml.to_string().starts_with("YAML parsing error"));

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(b"{ \"components\": ").unwrap();
        let json = StyleConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(json, ClassBuilderError::Json(_)));
    }

    #[test]
    fn test_unknown_component() {
        let config = StyleConfig::from_yaml_str(BUTTON_YAML).unwrap();
        let err = config.component("card").unwrap_err();
        assert!(matches!(err, ClassBuilderError::UnknownComponent(ref name) if name == "card"));
    }

    #[test]
    fn test_config_merge() {
        let base = StyleConfig::from_yaml_str(BUTTON_YAML).unwrap();

        let mut other = StyleConfig::default();
        other
            .components
            .insert("button".to_string(), VariantsConfig::new().with_base("replaced"));
        other
            .components
            .insert("card".to_string(), VariantsConfig::new().with_base("card"));

        let merged = base.merge(other);
        let names: Vec<_> = merged.components.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["button", "card"]);
        assert_eq!(merged.component("button").unwrap().base.as_deref(), Some("replaced"));
    }

    #[test]
    fn test_diagnostics() {
        let mut config = StyleConfig::default();
        config.components.insert(
            "odd".to_string(),
            VariantsConfig::new()
                .with_variant("className", [("foo", "bar")])
                .with_variant("size", [("sm", "text-sm")])
                .with_default("size", "xl")
                .with_default("shape", "round")
                .with_compound(CompoundVariant::new("x").when("tone", "loud"))
                .with_compound(CompoundVariant::new("y").when("size", "md")),
        );

        let diagnostics = config.diagnostics();
        assert_eq!(diagnostics.len(), 5);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert!(diagnostics[0].message.contains("reserved"));
        assert!(diagnostics[1..].iter().all(|d| d.severity == Severity::Warning));

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("error: odd: variant 'className'"));
    }

    #[test]
    fn test_clean_config_validates() {
        let config = StyleConfig::from_yaml_str(BUTTON_YAML).unwrap();
        assert!(config.diagnostics().is_empty());
        assert!(config.validate().is_ok());
    }
}
