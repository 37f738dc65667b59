//! Class name composition.

use crate::style::BlockProps;

/// Class carried by every visual block.
pub const BASE_CLASS: &str = "viberante-visual-block";

/// Joins the classes whose gate is true, in iteration order.
///
/// # Example
///
/// ```rust
/// use viberante::class_names;
///
/// assert_eq!(class_names([("a", true), ("b", false), ("c", true)]), "a c");
/// ```
pub fn class_names<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = (S, bool)>,
    S: AsRef<str>,
{
    let active: Vec<S> = classes
        .into_iter()
        .filter(|(_, gate)| *gate)
        .map(|(class, _)| class)
        .collect();
    let active: Vec<&str> = active.iter().map(AsRef::as_ref).collect();
    active.join(" ")
}

/// Builds the class string of a block: the base class, then the token
/// fragments, then the caller's `class_name`.
///
/// Token fragments are `padding-<token>`, `margin-<token>` and
/// `shadow-<token>` for every non-empty token, and `has-background` when a
/// background color was supplied (whether or not it is a valid color).
///
/// # Example
///
/// ```rust
/// use viberante::{block_class_name, BlockProps};
///
/// let props = BlockProps {
///     class_name: "card".into(),
///     ..BlockProps::default()
/// };
/// assert_eq!(
///     block_class_name(&props),
///     "viberante-visual-block padding-medium margin-none shadow-none card"
/// );
/// ```
pub fn block_class_name(props: &BlockProps) -> String {
    let fragments = class_names([
        (
            format!("padding-{}", props.padding),
            !props.padding.is_empty(),
        ),
        (format!("margin-{}", props.margin), !props.margin.is_empty()),
        (format!("shadow-{}", props.shadow), !props.shadow.is_empty()),
        (
            "has-background".to_string(),
            props
                .background_color
                .as_deref()
                .is_some_and(|color| !color.is_empty()),
        ),
    ]);

    [BASE_CLASS, fragments.as_str(), props.class_name.as_str()]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
