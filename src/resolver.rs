//! Class resolution.
//!
//! A [`ClassResolver`] closes over an immutable [`VariantsConfig`] and turns a
//! per-call [`Selection`] into a class string. Output order is fixed: base,
//! variants in effective-selection order (defaults first, then call-time
//! choices), matching compound rules in declaration order, then the
//! selection's extra class.

use crate::variants::{Selection, VariantKey, VariantsConfig};
use indexmap::IndexMap;
use std::sync::Arc;

/// Resolver built once from a configuration and called per render
#[derive(Debug, Clone)]
pub struct ClassResolver {
    config: Arc<VariantsConfig>,
}

impl ClassResolver {
    pub fn new(config: VariantsConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &VariantsConfig {
        &self.config
    }

    /// Merge defaults and call-time values for every declared variant.
    ///
    /// Keys are ordered like an object spread of the defaults followed by the
    /// selection: defaulted variants first, then call-time variants without a
    /// default, each in insertion order. Undeclared names are dropped.
    pub fn effective_selection<'a>(
        &'a self,
        selection: Option<&'a Selection>,
    ) -> IndexMap<&'a str, &'a VariantKey> {
        let config = &*self.config;
        let chosen = selection.into_iter().flat_map(|selection| selection.variants.keys());

        config
            .default_variants
            .keys()
            .chain(chosen)
            .filter(|name| config.variants.contains_key(name.as_str()))
            .filter_map(|name| {
                selection
                    .and_then(|selection| selection.variants.get(name))
                    .or_else(|| config.default_variants.get(name))
                    .map(|value| (name.as_str(), value))
            })
            .collect()
    }

    /// Resolve a selection into a space-separated class string.
    ///
    /// Never fails: unknown names and unmapped values contribute nothing.
    pub fn resolve(&self, selection: Option<&Selection>) -> String {
        let config = &*self.config;
        let mut classes: Vec<&str> = Vec::new();

        if let Some(base) = config.base.as_deref() {
            push_fragment(&mut classes, base);
        }

        let effective = self.effective_selection(selection);

        for (name, value) in &effective {
            match config.variants.get(*name).and_then(|group| group.get(value.as_str())) {
                Some(class) => push_fragment(&mut classes, class),
                None => tracing::trace!(variant = %name, value = %value, "no class mapped for variant value"),
            }
        }

        for rule in &config.compound_variants {
            if rule.matches(&effective) {
                push_fragment(&mut classes, &rule.class_name);
            }
        }

        if let Some(extra) = selection.and_then(|selection| selection.class_name.as_deref()) {
            push_fragment(&mut classes, extra);
        }

        classes.join(" ")
    }

    /// Resolve with nothing selected
    pub fn resolve_default(&self) -> String {
        self.resolve(None)
    }
}

fn push_fragment<'a>(classes: &mut Vec<&'a str>, fragment: &'a str) {
    if !fragment.is_empty() {
        classes.push(fragment);
    }
}

/// Build a resolver from a configuration
pub fn cb(config: VariantsConfig) -> ClassResolver {
    ClassResolver::new(config)
}

/// Build a resolver as a plain closure
pub fn make_resolver(
    config: VariantsConfig,
) -> impl Fn(Option<&Selection>) -> String + Clone + Send + Sync + 'static {
    let resolver = ClassResolver::new(config);
    move |selection: Option<&Selection>| resolver.resolve(selection)
}
