//! Compile-time checked selections.
//!
//! Declare each variant group as an enum with [`variant_enum!`], collect the
//! enums in a props struct implementing [`VariantProps`], and resolve through
//! a [`TypedResolver`]. The runtime resolver underneath stays key-based.

use crate::resolver::ClassResolver;
use crate::variants::{Selection, VariantsConfig};
use std::marker::PhantomData;

/// A props type that knows which variant values it selects
pub trait VariantProps {
    fn selection(&self) -> Selection;
}

impl VariantProps for Selection {
    fn selection(&self) -> Selection {
        self.clone()
    }
}

/// Resolver accepting only props of type `P`
#[derive(Debug)]
pub struct TypedResolver<P> {
    resolver: ClassResolver,
    _props: PhantomData<fn(&P)>,
}

impl<P> Clone for TypedResolver<P> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            _props: PhantomData,
        }
    }
}

impl<P: VariantProps> TypedResolver<P> {
    pub fn new(config: VariantsConfig) -> Self {
        Self::from_resolver(ClassResolver::new(config))
    }

    pub fn from_resolver(resolver: ClassResolver) -> Self {
        Self {
            resolver,
            _props: PhantomData,
        }
    }

    pub fn resolve(&self, props: &P) -> String {
        self.resolver.resolve(Some(&props.selection()))
    }

    /// Resolve and append `class_name` last
    pub fn resolve_with_class(&self, props: &P, class_name: &str) -> String {
        let selection = props.selection().with_class(class_name);
        self.resolver.resolve(Some(&selection))
    }

    pub fn inner(&self) -> &ClassResolver {
        &self.resolver
    }
}

/// Declare a closed set of variant values.
///
/// ```
/// class_builder::variant_enum! {
///     pub enum Size {
///         Small => "small",
///         Large => "large",
///     }
/// }
///
/// assert_eq!(Size::Large.as_key(), "large");
/// assert_eq!(Size::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_key())
            }
        }

        impl ::std::convert::From<$name> for $crate::VariantKey {
            fn from(value: $name) -> Self {
                $crate::VariantKey::from(value.as_key())
            }
        }
    };
}
