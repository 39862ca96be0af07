//! Component wrapper applying a resolver to an element's class attribute.

use crate::resolver::ClassResolver;
use crate::variants::{Selection, VariantKey, VariantsConfig, CLASS_KEY_ALIAS, CLASS_NAME_KEY};
use indexmap::IndexMap;

/// What a [`Styled`] wrapper renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    /// Plain string tag such as `button`
    Tag(String),
    /// Host component, optionally carrying its own name
    Component { name: Option<String> },
}

impl From<&str> for ElementType {
    fn from(tag: &str) -> Self {
        ElementType::Tag(tag.to_string())
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        ElementType::Tag(tag)
    }
}

/// Props handed to [`Styled::render`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledProps {
    pub class_name: Option<String>,
    pub variants: IndexMap<String, VariantKey>,
    /// Everything else, forwarded untouched
    pub attributes: IndexMap<String, String>,
}

impl StyledProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_variant(mut self, name: impl Into<String>, value: impl Into<VariantKey>) -> Self {
        self.variants.insert(name.into(), value.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// Output of one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub element_type: ElementType,
    /// `None` when the resolver produced nothing
    pub class_name: Option<String>,
    pub attributes: IndexMap<String, String>,
}

/// An element type bound to a class configuration
#[derive(Debug, Clone)]
pub struct Styled {
    element_type: ElementType,
    resolver: ClassResolver,
    display_name: Option<String>,
}

/// Wrap `element_type` so every render resolves its classes from `config`
pub fn styled(element_type: impl Into<ElementType>, config: VariantsConfig) -> Styled {
    Styled::new(element_type, ClassResolver::new(config))
}

impl Styled {
    pub fn new(element_type: impl Into<ElementType>, resolver: ClassResolver) -> Self {
        let element_type = element_type.into();
        let display_name = match &element_type {
            ElementType::Tag(tag) => Some(tag.clone()),
            ElementType::Component { .. } => None,
        };

        Self {
            element_type,
            resolver,
            display_name,
        }
    }

    /// Override the derived display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    pub fn resolver(&self) -> &ClassResolver {
        &self.resolver
    }

    /// Resolve the props into an element.
    ///
    /// `className` and `class` attributes are never forwarded. When
    /// `props.class_name` is unset, the `className` attribute (else `class`)
    /// becomes the extra class.
    pub fn render(&self, props: StyledProps) -> Element {
        let StyledProps {
            class_name,
            variants,
            mut attributes,
        } = props;

        let class_attribute = attributes.shift_remove(CLASS_NAME_KEY);
        let alias_attribute = attributes.shift_remove(CLASS_KEY_ALIAS);
        let class_name = class_name.or(class_attribute).or(alias_attribute);

        let selection = Selection {
            variants,
            class_name,
        };
        let classes = self.resolver.resolve(Some(&selection));

        Element {
            element_type: self.element_type.clone(),
            class_name: (!classes.is_empty()).then_some(classes),
            attributes,
        }
    }
}
