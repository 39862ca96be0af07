use crate::config::StyleConfig;
use crate::variants::VariantsConfig;
use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata for the generated manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Version of the manifest format
    pub version: String,

    /// Timestamp when the manifest was generated
    pub generated_at: DateTime<Utc>,

    /// Number of components described
    pub components: usize,

    /// Number of unique class names across all components
    pub classes: usize,

    /// Config files the components were loaded from
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    /// Builder version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder_version: Option<String>,
}

/// Every fragment a single component can emit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentClasses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Variant name -> value -> fragment
    pub variants: IndexMap<String, IndexMap<String, String>>,

    /// Compound fragments in declaration order
    pub compound: Vec<String>,

    /// Unique individual class names in first-seen order
    pub classes: Vec<String>,
}

impl ComponentClasses {
    pub fn from_config(config: &VariantsConfig) -> Self {
        let mut classes = IndexSet::new();
        let mut collect = |fragment: &str| {
            for class in fragment.split_whitespace() {
                classes.insert(class.to_string());
            }
        };

        if let Some(base) = &config.base {
            collect(base);
        }

        let variants: IndexMap<String, IndexMap<String, String>> = config
            .variants
            .iter()
            .map(|(name, group)| {
                let values: IndexMap<String, String> = group
                    .iter()
                    .map(|(value, fragment)| {
                        collect(fragment);
                        (value.to_string(), fragment.clone())
                    })
                    .collect();
                (name.clone(), values)
            })
            .collect();

        let compound: Vec<String> = config
            .compound_variants
            .iter()
            .map(|rule| {
                collect(&rule.class_name);
                rule.class_name.clone()
            })
            .collect();

        Self {
            base: config.base.clone(),
            variants,
            compound,
            classes: classes.into_iter().collect(),
        }
    }
}

/// Complete manifest structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassManifest {
    pub metadata: ManifestMetadata,

    pub components: IndexMap<String, ComponentClasses>,

    /// Union of all component classes
    pub classes: Vec<String>,
}

impl ClassManifest {
    pub fn new() -> Self {
        Self {
            metadata: ManifestMetadata {
                version: "1.0.0".to_string(),
                generated_at: Utc::now(),
                components: 0,
                classes: 0,
                sources: Vec::new(),
                builder_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            },
            components: IndexMap::new(),
            classes: Vec::new(),
        }
    }

    /// Add or replace a component
    pub fn add_component(&mut self, name: impl Into<String>, config: &VariantsConfig) {
        self.components.insert(name.into(), ComponentClasses::from_config(config));
        self.refresh();
    }

    fn refresh(&mut self) {
        let classes: IndexSet<&String> = self
            .components
            .values()
            .flat_map(|component| component.classes.iter())
            .collect();
        self.classes = classes.into_iter().cloned().collect();
        self.metadata.components = self.components.len();
        self.metadata.classes = self.classes.len();
    }

    /// Convert manifest to JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }

    /// Convert manifest to pretty JSON string
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert manifest to compact JSON string
    pub fn to_compact_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for ClassManifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating manifests
#[derive(Default)]
pub struct ManifestBuilder {
    manifest: ClassManifest,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a config file the components came from
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.manifest.metadata.sources.push(source.into());
        self
    }

    pub fn with_component(mut self, name: impl Into<String>, config: &VariantsConfig) -> Self {
        self.manifest.add_component(name, config);
        self
    }

    /// Add every component of a style config
    pub fn with_style_config(mut self, config: &StyleConfig) -> Self {
        for (name, component) in &config.components {
            self.manifest.add_component(name.clone(), component);
        }
        self
    }

    pub fn build(self) -> ClassManifest {
        self.manifest
    }
}
