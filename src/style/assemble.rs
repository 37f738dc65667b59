//! Style assembly from block props.

use crate::color::is_valid_color;
use crate::tokens::{BORDER_RADIUS, BORDER_WIDTH, SHADOW, SPACING};

use super::props::BlockProps;
use super::record::StyleRecord;

/// Resolves a prop set into the style record applied to the block.
///
/// Layers, lowest precedence first:
///
/// 1. the caller's raw `style` overrides
/// 2. `padding` and `margin`, resolved against the spacing scale
/// 3. `backgroundColor` / `borderColor`, only if they are valid colors
/// 4. `borderStyle: solid` plus `borderWidth`, unless the width resolves to `"0"`
/// 5. `borderRadius` and `boxShadow`
/// 6. `display`, and for `flex` / `inline-flex` only: `flexDirection`
///    (default `row`), `justifyContent`, `alignItems` and `gap`
/// 7. `width` / `height`, verbatim
///
/// Optional props that are absent are never inserted. Invalid colors are
/// dropped without error.
///
/// # Example
///
/// ```rust
/// use viberante::{resolve_style, BlockProps};
///
/// let props = BlockProps {
///     padding: "small".into(),
///     background_color: Some("#fff".into()),
///     display: "flex".into(),
///     ..BlockProps::default()
/// };
/// let style = resolve_style(&props);
///
/// assert_eq!(style.get("padding"), Some("8px"));
/// assert_eq!(style.get("backgroundColor"), Some("#fff"));
/// assert_eq!(style.get("flexDirection"), Some("row"));
/// ```
pub fn resolve_style(props: &BlockProps) -> StyleRecord {
    let mut style = props.style.clone();

    style.set("padding", SPACING.resolve(&props.padding));
    style.set("margin", SPACING.resolve(&props.margin));

    style.set_opt(
        "backgroundColor",
        admit_color("backgroundColor", props.background_color.as_deref()),
    );
    style.set_opt(
        "borderColor",
        admit_color("borderColor", props.border_color.as_deref()),
    );

    let border_width = BORDER_WIDTH.resolve(&props.border_width);
    if border_width != "0" {
        style.set("borderStyle", "solid");
        style.set("borderWidth", border_width);
    }

    style.set("borderRadius", BORDER_RADIUS.resolve(&props.border_radius));
    style.set("boxShadow", SHADOW.resolve(&props.shadow));

    style.set("display", props.display.as_str());
    if props.is_flex() {
        let direction = props
            .flex_direction
            .as_deref()
            .filter(|direction| !direction.is_empty())
            .unwrap_or("row");
        style.set("flexDirection", direction);
        style.set_opt("justifyContent", props.justify_content.as_deref());
        style.set_opt("alignItems", props.align_items.as_deref());
        style.set_opt("gap", props.gap.as_deref().map(|gap| SPACING.resolve(gap)));
    }

    style.set_opt("width", props.width.as_deref());
    style.set_opt("height", props.height.as_deref());

    style
}

fn admit_color<'a>(property: &str, color: Option<&'a str>) -> Option<&'a str> {
    let color = color?;
    if is_valid_color(color) {
        Some(color)
    } else {
        tracing::debug!(property, value = color, "dropping invalid color");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flex_props() -> BlockProps {
        BlockProps {
            display: "flex".into(),
            ..BlockProps::default()
        }
    }

    #[test]
    fn test_defaults() {
        let style = resolve_style(&BlockProps::default());
        assert_eq!(
            style.iter().collect::<Vec<_>>(),
            vec![
                ("padding", "16px"),
                ("margin", "0"),
                ("borderRadius", "8px"),
                ("boxShadow", "none"),
                ("display", "block"),
            ]
        );
    }

    #[test]
    fn test_literal_tokens_pass_through() {
        let props = BlockProps {
            padding: "1rem 2rem".into(),
            margin: "auto".into(),
            border_radius: "3px".into(),
            shadow: "0 0 1px red".into(),
            ..BlockProps::default()
        };
        let style = resolve_style(&props);
        assert_eq!(style.get("padding"), Some("1rem 2rem"));
        assert_eq!(style.get("margin"), Some("auto"));
        assert_eq!(style.get("borderRadius"), Some("3px"));
        assert_eq!(style.get("boxShadow"), Some("0 0 1px red"));
    }

    #[test]
    fn test_valid_colors_admitted() {
        let props = BlockProps {
            background_color: Some("rgb(1, 2, 3)".into()),
            border_color: Some("navy".into()),
            ..BlockProps::default()
        };
        let style = resolve_style(&props);
        assert_eq!(style.get("backgroundColor"), Some("rgb(1, 2, 3)"));
        assert_eq!(style.get("borderColor"), Some("navy"));
    }

    #[test]
    fn test_invalid_colors_dropped() {
        let props = BlockProps {
            background_color: Some("not-a-color".into()),
            border_color: Some(String::new()),
            ..BlockProps::default()
        };
        let style = resolve_style(&props);
        assert!(!style.contains("backgroundColor"));
        assert!(!style.contains("borderColor"));
    }

    #[test]
    fn test_invalid_color_keeps_override() {
        let props = BlockProps {
            style: StyleRecord::new().with("backgroundColor", "papayawhip"),
            background_color: Some("nope".into()),
            ..BlockProps::default()
        };
        let style = resolve_style(&props);
        assert_eq!(style.get("backgroundColor"), Some("papayawhip"));
    }

    #[test]
    fn test_zero_border_has_no_style() {
        for width in ["none", "0"] {
            let props = BlockProps {
                border_width: width.into(),
                ..BlockProps::default()
            };
            let style = resolve_style(&props);
            assert!(!style.contains("borderStyle"), "width {width}");
            assert!(!style.contains("borderWidth"), "width {width}");
        }
    }

    #[test]
    fn test_nonzero_border_is_solid() {
        let props = BlockProps {
            border_width: "thin".into(),
            ..BlockProps::default()
        };
        let style = resolve_style(&props);
        assert_eq!(style.get("borderStyle"), Some("solid"));
        assert_eq!(style.get("borderWidth"), Some("1px"));

        let props = BlockProps {
            border_width: "3px".into(),
            ..BlockProps::default()
        };
        assert_eq!(resolve_style(&props).get("borderWidth"), Some("3px"));
    }

    #[test]
    fn test_flex_props_ignored_outside_flex() {
        let props = BlockProps {
            display: "grid".into(),
            flex_direction: Some("column".into()),
            justify_content: Some("center".into()),
            align_items: Some("start".into()),
            gap: Some("small".into()),
            ..BlockProps::default()
        };
        let style = resolve_style(&props);
        for property in ["flexDirection", "justifyContent", "alignItems", "gap"] {
            assert!(!style.contains(property), "{property} should be absent");
        }
        assert_eq!(style.get("display"), Some("grid"));
    }

    #[test]
    fn test_flex_defaults_to_row() {
        let style = resolve_style(&flex_props());
        assert_eq!(style.get("flexDirection"), Some("row"));
        assert!(!style.contains("justifyContent"));
        assert!(!style.contains("alignItems"));
        assert!(!style.contains("gap"));
    }

    #[test]
    fn test_flex_empty_direction_defaults_to_row() {
        let props = BlockProps {
            flex_direction: Some(String::new()),
            ..flex_props()
        };
        assert_eq!(resolve_style(&props).get("flexDirection"), Some("row"));
    }

    #[test]
    fn test_inline_flex_resolves_gap_on_spacing_scale() {
        let props = BlockProps {
            display: "inline-flex".into(),
            flex_direction: Some("column".into()),
            align_items: Some("center".into()),
            gap: Some("xlarge".into()),
            ..BlockProps::default()
        };
        let style = resolve_style(&props);
        assert_eq!(style.get("flexDirection"), Some("column"));
        assert_eq!(style.get("alignItems"), Some("center"));
        assert_eq!(style.get("gap"), Some("64px"));
    }

    #[test]
    fn test_dimensions_verbatim() {
        let props = BlockProps {
            width: Some("50%".into()),
            height: Some("large".into()),
            ..BlockProps::default()
        };
        let style = resolve_style(&props);
        assert_eq!(style.get("width"), Some("50%"));
        assert_eq!(style.get("height"), Some("large"));
    }

    #[test]
    fn test_overrides_are_lowest_precedence() {
        let props = BlockProps {
            style: StyleRecord::new()
                .with("padding", "99px")
                .with("color", "red")
                .with("width", "10px"),
            padding: "small".into(),
            ..BlockProps::default()
        };
        let style = resolve_style(&props);
        assert_eq!(style.get("padding"), Some("8px"));
        assert_eq!(style.get("color"), Some("red"));
        // No width prop: the override survives.
        assert_eq!(style.get("width"), Some("10px"));
    }

    #[test]
    fn test_end_to_end_example() {
        let props = BlockProps {
            padding: "small".into(),
            shadow: "large".into(),
            background_color: Some("#fff".into()),
            display: "flex".into(),
            justify_content: Some("center".into()),
            ..BlockProps::default()
        };
        let style = resolve_style(&props);
        assert_eq!(style.get("padding"), Some("8px"));
        assert_eq!(style.get("boxShadow"), SHADOW.get("large"));
        assert_eq!(style.get("backgroundColor"), Some("#fff"));
        assert_eq!(style.get("display"), Some("flex"));
        assert_eq!(style.get("flexDirection"), Some("row"));
        assert_eq!(style.get("justifyContent"), Some("center"));
    }
}
