//! The visual block prop set.

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::{Number, Value};

use super::record::StyleRecord;
use crate::util::is_unitless_property;

pub const DEFAULT_TAG: &str = "div";
pub const DEFAULT_PADDING: &str = "medium";
pub const DEFAULT_MARGIN: &str = "none";
pub const DEFAULT_BORDER_WIDTH: &str = "none";
pub const DEFAULT_BORDER_RADIUS: &str = "medium";
pub const DEFAULT_SHADOW: &str = "none";
pub const DEFAULT_DISPLAY: &str = "block";

/// The declarative props of a visual block.
///
/// Token props (`padding`, `margin`, `border_width`, `border_radius`,
/// `shadow`, `gap`) take a token name or a literal CSS value. Optional props
/// that are `None` contribute nothing to the resolved style.
///
/// Props deserialize from camelCase documents (`backgroundColor`,
/// `borderRadius`, `as` for the tag). Scalar props accept strings or numbers;
/// any other value type is treated as absent. Numbers given for lengths
/// (spacing, border, radius, gap, width, height and non-unitless style
/// overrides) are pixels, so `320` becomes `320px` while `0` stays `0`. Keys
/// that are not props are kept as forwarded attributes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawProps")]
pub struct BlockProps {
    /// Element tag to render, `div` by default.
    pub tag: String,
    /// Caller classes, appended after the generated ones.
    pub class_name: String,
    /// Raw style overrides; the lowest-precedence layer of the resolved style.
    pub style: StyleRecord,
    pub padding: String,
    pub margin: String,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub border_width: String,
    pub border_radius: String,
    pub shadow: String,
    pub display: String,
    pub flex_direction: Option<String>,
    pub justify_content: Option<String>,
    pub align_items: Option<String>,
    pub gap: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    /// Attributes forwarded to the rendered element untouched.
    pub attributes: IndexMap<String, String>,
    /// Children declared in a props document.
    pub children: Vec<ChildProps>,
}

impl BlockProps {
    /// Returns true when the display mode lays children out with flexbox.
    pub fn is_flex(&self) -> bool {
        matches!(self.display.as_str(), "flex" | "inline-flex")
    }

    /// Returns true when the display mode is a CSS grid.
    pub fn is_grid(&self) -> bool {
        matches!(self.display.as_str(), "grid" | "inline-grid")
    }
}

impl Default for BlockProps {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            class_name: String::new(),
            style: StyleRecord::new(),
            padding: DEFAULT_PADDING.to_string(),
            margin: DEFAULT_MARGIN.to_string(),
            background_color: None,
            border_color: None,
            border_width: DEFAULT_BORDER_WIDTH.to_string(),
            border_radius: DEFAULT_BORDER_RADIUS.to_string(),
            shadow: DEFAULT_SHADOW.to_string(),
            display: DEFAULT_DISPLAY.to_string(),
            flex_direction: None,
            justify_content: None,
            align_items: None,
            gap: None,
            width: None,
            height: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }
}

/// A child declared in a props document: plain text or a nested block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ChildProps {
    Text(String),
    Block(Box<BlockProps>),
}

/// A scalar prop as it appears in a document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(Number),
    Other(IgnoredAny),
}

impl Scalar {
    fn into_string(self) -> Option<String> {
        match self {
            Scalar::Text(text) => Some(text),
            Scalar::Number(number) => Some(number.to_string()),
            Scalar::Other(_) => None,
        }
    }

    fn into_length(self) -> Option<String> {
        match self {
            Scalar::Number(number) => Some(pixels(&number)),
            other => other.into_string(),
        }
    }

    fn into_style_value(self, property: &str) -> Option<String> {
        if is_unitless_property(property) {
            self.into_string()
        } else {
            self.into_length()
        }
    }
}

fn pixels(number: &Number) -> String {
    if number.as_f64() == Some(0.0) {
        "0".to_string()
    } else {
        format!("{}px", number)
    }
}

fn scalar(value: Option<Scalar>) -> Option<String> {
    value.and_then(Scalar::into_string)
}

fn scalar_or(value: Option<Scalar>, default: &str) -> String {
    scalar(value).unwrap_or_else(|| default.to_string())
}

fn length(value: Option<Scalar>) -> Option<String> {
    value.and_then(Scalar::into_length)
}

fn length_or(value: Option<Scalar>, default: &str) -> String {
    length(value).unwrap_or_else(|| default.to_string())
}

/// Converts a forwarded attribute value. `true` becomes an empty (boolean)
/// attribute; `false`, `null` and structured values are dropped.
fn attribute_value(name: &str, value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(true) => Some(String::new()),
        Value::Bool(false) | Value::Null => None,
        Value::Array(_) | Value::Object(_) => {
            tracing::debug!(attribute = name, "dropping structured attribute value");
            None
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProps {
    #[serde(rename = "as")]
    tag: Option<Scalar>,
    class_name: Option<Scalar>,
    #[serde(default)]
    style: IndexMap<String, Scalar>,
    padding: Option<Scalar>,
    margin: Option<Scalar>,
    background_color: Option<Scalar>,
    border_color: Option<Scalar>,
    border_width: Option<Scalar>,
    border_radius: Option<Scalar>,
    shadow: Option<Scalar>,
    display: Option<Scalar>,
    flex_direction: Option<Scalar>,
    justify_content: Option<Scalar>,
    align_items: Option<Scalar>,
    gap: Option<Scalar>,
    width: Option<Scalar>,
    height: Option<Scalar>,
    #[serde(default)]
    children: Vec<ChildProps>,
    #[serde(flatten)]
    rest: IndexMap<String, Value>,
}

impl From<RawProps> for BlockProps {
    fn from(raw: RawProps) -> Self {
        let style = raw
            .style
            .into_iter()
            .filter_map(|(property, value)| {
                value
                    .into_style_value(&property)
                    .map(|value| (property, value))
            })
            .collect();
        let attributes = raw
            .rest
            .into_iter()
            .filter_map(|(name, value)| attribute_value(&name, value).map(|value| (name, value)))
            .collect();

        Self {
            tag: scalar_or(raw.tag, DEFAULT_TAG),
            class_name: scalar(raw.class_name).unwrap_or_default(),
            style,
            padding: length_or(raw.padding, DEFAULT_PADDING),
            margin: length_or(raw.margin, DEFAULT_MARGIN),
            background_color: scalar(raw.background_color),
            border_color: scalar(raw.border_color),
            border_width: length_or(raw.border_width, DEFAULT_BORDER_WIDTH),
            border_radius: length_or(raw.border_radius, DEFAULT_BORDER_RADIUS),
            shadow: scalar_or(raw.shadow, DEFAULT_SHADOW),
            display: scalar_or(raw.display, DEFAULT_DISPLAY),
            flex_direction: scalar(raw.flex_direction),
            justify_content: scalar(raw.justify_content),
            align_items: scalar(raw.align_items),
            gap: length(raw.gap),
            width: length(raw.width),
            height: length(raw.height),
            attributes,
            children: raw.children,
        }
    }
}
