//! Utility functions for CSS property names and HTML names.

/// Converts a camelCase style property into its CSS kebab-case form.
///
/// Names that already contain a dash (custom properties such as `--brand`, or
/// names written in CSS form) are returned unchanged. A leading uppercase
/// letter marks a vendor prefix, as in `WebkitTransition`; the Microsoft
/// prefix is conventionally lowercase (`msTransition`).
///
/// # Example
///
/// ```rust
/// use viberante::css_property_name;
///
/// assert_eq!(css_property_name("boxShadow"), "box-shadow");
/// assert_eq!(css_property_name("WebkitTransition"), "-webkit-transition");
/// assert_eq!(css_property_name("msTransition"), "-ms-transition");
/// assert_eq!(css_property_name("--brand"), "--brand");
/// ```
pub fn css_property_name(name: &str) -> String {
    if name.contains('-') {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    if name.starts_with("ms") && name[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Style properties whose numeric values carry no unit.
const UNITLESS_PROPERTIES: &[&str] = &[
    "animationIterationCount",
    "aspectRatio",
    "borderImageOutset",
    "borderImageSlice",
    "borderImageWidth",
    "columnCount",
    "columns",
    "fillOpacity",
    "flex",
    "flexGrow",
    "flexShrink",
    "floodOpacity",
    "fontWeight",
    "gridArea",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnStart",
    "gridRow",
    "gridRowEnd",
    "gridRowStart",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "scale",
    "stopOpacity",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
];

/// Returns true if a number given for `property` is used without a unit.
/// Custom properties (`--name`) are always unitless.
pub(crate) fn is_unitless_property(property: &str) -> bool {
    property.starts_with("--") || UNITLESS_PROPERTIES.contains(&property)
}

/// Returns true for a usable HTML tag name: an ASCII letter followed by
/// letters, digits or dashes (custom elements).
pub fn is_valid_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Returns true for a usable HTML attribute name.
pub fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

/// Elements that have no closing tag and cannot hold children.
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

pub(crate) fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| tag.eq_ignore_ascii_case(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_property_name_camel_case() {
        assert_eq!(css_property_name("padding"), "padding");
        assert_eq!(css_property_name("backgroundColor"), "background-color");
        assert_eq!(css_property_name("gridTemplateColumns"), "grid-template-columns");
    }

    #[test]
    fn test_css_property_name_vendor_prefix() {
        assert_eq!(css_property_name("MozAppearance"), "-moz-appearance");
        assert_eq!(css_property_name("msTransition"), "-ms-transition");
        assert_eq!(css_property_name("msGridColumns"), "-ms-grid-columns");
        // only a lowercase `ms` directly followed by a capital is a prefix
        assert_eq!(css_property_name("msx"), "msx");
        assert_eq!(css_property_name("mask"), "mask");
    }

    #[test]
    fn test_unitless_properties() {
        assert!(is_unitless_property("zIndex"));
        assert!(is_unitless_property("opacity"));
        assert!(is_unitless_property("--columns"));
        assert!(!is_unitless_property("width"));
        assert!(!is_unitless_property("marginTop"));
    }

    #[test]
    fn test_css_property_name_already_kebab() {
        assert_eq!(css_property_name("border-top"), "border-top");
        assert_eq!(css_property_name("--vv-primary"), "--vv-primary");
    }

    #[test]
    fn test_valid_tag_names() {
        assert!(is_valid_tag_name("div"));
        assert!(is_valid_tag_name("h1"));
        assert!(is_valid_tag_name("my-widget"));
    }

    #[test]
    fn test_invalid_tag_names() {
        assert!(!is_valid_tag_name(""));
        assert!(!is_valid_tag_name("1div"));
        assert!(!is_valid_tag_name("div onclick"));
        assert!(!is_valid_tag_name("script>"));
    }

    #[test]
    fn test_attribute_names() {
        assert!(is_valid_attribute_name("data-id"));
        assert!(is_valid_attribute_name("aria-label"));
        assert!(is_valid_attribute_name("xml:lang"));
        assert!(!is_valid_attribute_name("on click"));
        assert!(!is_valid_attribute_name("\"x"));
        assert!(!is_valid_attribute_name(""));
    }

    #[test]
    fn test_void_elements() {
        assert!(is_void_element("img"));
        assert!(is_void_element("BR"));
        assert!(!is_void_element("div"));
    }
}
