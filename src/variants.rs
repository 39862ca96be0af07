use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Wire key holding a class name, shared by compound rules and selections
pub const CLASS_NAME_KEY: &str = "className";

/// Accepted alias for [`CLASS_NAME_KEY`]
pub const CLASS_KEY_ALIAS: &str = "class";

/// A normalized variant value.
///
/// Strings, numbers and booleans all collapse to one string form, so `1`
/// and `"1"` address the same entry of a class mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VariantKey(String);

impl VariantKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for VariantKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VariantKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for VariantKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&String> for VariantKey {
    fn from(key: &String) -> Self {
        Self(key.clone())
    }
}

impl From<bool> for VariantKey {
    fn from(key: bool) -> Self {
        Self(key.to_string())
    }
}

impl From<f64> for VariantKey {
    fn from(key: f64) -> Self {
        Self(number_key(key))
    }
}

/// Format a float the way object keys stringify numbers: `NaN`, `Infinity`,
/// `-0` as `0`, and exponent form (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
fn number_key(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let key = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return key.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

macro_rules! impl_variant_key_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for VariantKey {
                fn from(key: $ty) -> Self {
                    Self(key.to_string())
                }
            }
        )*
    };
}

impl_variant_key_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Raw wire form of a variant key before normalization
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl<'de> Deserialize<'de> for VariantKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawKey::deserialize(deserializer)? {
            RawKey::Bool(value) => value.into(),
            RawKey::Int(value) => value.into(),
            RawKey::UInt(value) => value.into(),
            RawKey::Float(value) => value.into(),
            RawKey::Str(value) => value.into(),
        })
    }
}

/// Class mapping of a single variant group
pub type VariantGroup = IndexMap<VariantKey, String>;

/// Additive rule contributing `class_name` when every constraint holds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundVariant {
    /// Required value per variant name
    #[serde(flatten)]
    pub conditions: IndexMap<String, VariantKey>,

    /// Class fragment appended on match
    #[serde(rename = "className", alias = "class")]
    pub class_name: String,
}

impl CompoundVariant {
    /// Create a rule with no constraints; it matches every selection
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            conditions: IndexMap::new(),
            class_name: class_name.into(),
        }
    }

    /// Add a required variant value
    pub fn when(mut self, name: impl Into<String>, value: impl Into<VariantKey>) -> Self {
        self.conditions.insert(name.into(), value.into());
        self
    }

    /// Check the rule against an effective selection
    pub fn matches(&self, effective: &IndexMap<&str, &VariantKey>) -> bool {
        self.conditions
            .iter()
            .all(|(name, required)| effective.get(name.as_str()).is_some_and(|value| *value == required))
    }
}

/// Declarative class configuration of one component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariantsConfig {
    /// Class fragment always emitted first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Variant groups in declaration order
    pub variants: IndexMap<String, VariantGroup>,

    /// Values used when a selection leaves a variant undefined
    #[serde(alias = "default_variants")]
    pub default_variants: IndexMap<String, VariantKey>,

    /// Compound rules in declaration order
    #[serde(alias = "compound_variants")]
    pub compound_variants: Vec<CompoundVariant>,
}

impl VariantsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base class
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Declare a variant group from `(value, class)` pairs
    pub fn with_variant<K, C, I>(mut self, name: impl Into<String>, values: I) -> Self
    where
        K: Into<VariantKey>,
        C: Into<String>,
        I: IntoIterator<Item = (K, C)>,
    {
        let group = values
            .into_iter()
            .map(|(key, class)| (key.into(), class.into()))
            .collect();
        self.variants.insert(name.into(), group);
        self
    }

    /// Set the default value of a variant
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<VariantKey>) -> Self {
        self.default_variants.insert(name.into(), value.into());
        self
    }

    /// Append a compound rule
    pub fn with_compound(mut self, rule: CompoundVariant) -> Self {
        self.compound_variants.push(rule);
        self
    }
}

/// Per-call variant choice plus an optional extra class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSelection")]
pub struct Selection {
    #[serde(flatten)]
    pub variants: IndexMap<String, VariantKey>,

    #[serde(rename = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Wire form of a selection; `null` values leave a variant undefined
#[derive(Deserialize)]
struct RawSelection {
    #[serde(flatten)]
    variants: IndexMap<String, Option<VariantKey>>,

    #[serde(rename = "className", alias = "class", default)]
    class_name: Option<String>,
}

impl From<RawSelection> for Selection {
    fn from(raw: RawSelection) -> Self {
        Self {
            variants: raw
                .variants
                .into_iter()
                .filter_map(|(name, value)| value.map(|value| (name, value)))
                .collect(),
            class_name: raw.class_name,
        }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a value for a variant
    pub fn with(mut self, name: impl Into<String>, value: impl Into<VariantKey>) -> Self {
        self.variants.insert(name.into(), value.into());
        self
    }

    /// Choose a value only when one is given
    pub fn with_opt<K: Into<VariantKey>>(self, name: impl Into<String>, value: Option<K>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Set the extra class appended after all variant output
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&VariantKey> {
        self.variants.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty() && self.class_name.is_none()
    }
}
