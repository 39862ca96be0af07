use class_builder::{
    styled, variant_enum, ClassResolver, CompoundVariant, ElementType, Selection, Styled, StyledProps,
    TypedResolver, VariantProps, VariantsConfig,
};

variant_enum! {
    pub enum Size {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

variant_enum! {
    pub enum Color {
        Red => "red",
        Green => "green",
        Blue => "blue",
    }
}

#[derive(Default)]
struct ButtonProps {
    size: Option<Size>,
    color: Option<Color>,
}

impl VariantProps for ButtonProps {
    fn selection(&self) -> Selection {
        Selection::new()
            .with_opt("size", self.size)
            .with_opt("color", self.color)
    }
}

fn button_config() -> VariantsConfig {
    VariantsConfig::new()
        .with_base("base")
        .with_variant("size", [(Size::Small, "sm"), (Size::Medium, "md"), (Size::Large, "lg")])
        .with_variant("color", [(Color::Red, "red"), (Color::Green, "green"), (Color::Blue, "blue")])
        .with_default("color", Color::Red)
        .with_compound(CompoundVariant::new("compound").when("color", Color::Blue))
}

#[test]
fn test_typed_props_resolve() {
    let resolver: TypedResolver<ButtonProps> = TypedResolver::new(button_config());

    assert_eq!(resolver.resolve(&ButtonProps::default()), "base red");
    assert_eq!(
        resolver.resolve(&ButtonProps {
            size: Some(Size::Large),
            color: Some(Color::Blue),
        }),
        "base blue lg compound"
    );
    assert_eq!(
        resolver.resolve_with_class(
            &ButtonProps {
                size: Some(Size::Large),
                color: Some(Color::Blue),
            },
            "suffix"
        ),
        "base blue lg compound suffix"
    );
}

#[test]
fn test_typed_resolver_shares_runtime_resolver() {
    let runtime = ClassResolver::new(button_config());
    let typed: TypedResolver<ButtonProps> = TypedResolver::from_resolver(runtime.clone());

    let props = ButtonProps {
        size: Some(Size::Medium),
        color: None,
    };
    assert_eq!(typed.resolve(&props), runtime.resolve(Some(&props.selection())));
    assert_eq!(typed.inner().config(), runtime.config());
}

#[test]
fn test_every_declared_value_is_mapped() {
    let config = button_config();
    for size in Size::ALL {
        assert!(config.variants["size"].contains_key(size.as_key()));
    }
    for color in Color::ALL {
        assert!(config.variants["color"].contains_key(color.as_key()));
    }
}

#[test]
fn test_render_sets_class_and_passes_attributes() {
    let button = styled("button", button_config());

    let element = button.render(
        StyledProps::new()
            .with_variant("size", Size::Small)
            .with_class("ml-2")
            .with_attribute("type", "submit")
            .with_attribute("aria-label", "Save"),
    );

    assert_eq!(element.element_type, ElementType::Tag("button".to_string()));
    assert_eq!(element.class_name.as_deref(), Some("base red sm ml-2"));

    let attributes: Vec<_> = element
        .attributes
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    assert_eq!(attributes, vec![("type", "submit"), ("aria-label", "Save")]);
}

#[test]
fn test_class_attributes_are_not_forwarded() {
    let button = styled("button", button_config());

    let from_attribute = button.render(
        StyledProps::new()
            .with_attribute("className", "ml-2")
            .with_attribute("type", "button")
            .with_attribute("class", "ignored"),
    );
    assert_eq!(from_attribute.class_name.as_deref(), Some("base red ml-2"));
    assert_eq!(from_attribute.attributes.keys().collect::<Vec<_>>(), vec!["type"]);

    let from_alias = button.render(StyledProps::new().with_attribute("class", "mt-1"));
    assert_eq!(from_alias.class_name.as_deref(), Some("base red mt-1"));
    assert!(from_alias.attributes.is_empty());

    let explicit = button.render(
        StyledProps::new()
            .with_class("explicit")
            .with_attribute("className", "dropped"),
    );
    assert_eq!(explicit.class_name.as_deref(), Some("base red explicit"));
    assert!(explicit.attributes.is_empty());
}

#[test]
fn test_empty_result_omits_class() {
    let plain = styled("span", VariantsConfig::new());
    let element = plain.render(StyledProps::new().with_attribute("id", "x"));

    assert_eq!(element.class_name, None);
    assert_eq!(element.attributes["id"], "x");
}

#[test]
fn test_display_name_from_string_tag() {
    assert_eq!(styled("button", VariantsConfig::new()).display_name(), Some("button"));

    let component = styled(ElementType::Component { name: None }, VariantsConfig::new());
    assert_eq!(component.display_name(), None);

    let named = Styled::new(
        ElementType::Component {
            name: Some("Link".to_string()),
        },
        ClassResolver::new(VariantsConfig::new()),
    )
    .with_display_name("StyledLink");
    assert_eq!(named.display_name(), Some("StyledLink"));

    let overridden = styled("a", VariantsConfig::new()).with_display_name("Anchor");
    assert_eq!(overridden.display_name(), Some("Anchor"));
}

#[test]
fn test_each_render_is_independent() {
    let button = styled("button", button_config());

    let blue = button.render(StyledProps::new().with_variant("color", Color::Blue));
    let plain = button.render(StyledProps::new());

    assert_eq!(blue.class_name.as_deref(), Some("base blue compound"));
    assert_eq!(plain.class_name.as_deref(), Some("base red"));
}
