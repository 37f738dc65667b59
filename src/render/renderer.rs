//! HTML renderer for element trees.

use minijinja::{context, Environment, Value};

use crate::block::{Element, Node, VisualBlock};
use crate::error::RenderError;
use crate::util::{is_valid_attribute_name, is_valid_tag_name, is_void_element};

const ELEMENT_TEMPLATE_NAME: &str = "element.html";

const ELEMENT_TEMPLATE: &str = concat!(
    "<{{ tag }}",
    r#"{% if class_name %} class="{{ class_name }}"{% endif %}"#,
    r#"{% if style %} style="{{ style }}"{% endif %}"#,
    r#"{% for name, value in attributes %} {{ name }}="{{ value }}"{% endfor %}"#,
    ">",
    "{% if not void %}{% for child in children %}{{ child }}{% endfor %}</{{ tag }}>{% endif %}",
);

/// Renders elements to HTML.
///
/// Attribute values and text children are HTML-escaped; nested elements are
/// rendered recursively. Void elements (`img`, `br`, `input`, ...) are written
/// without a closing tag and their children are ignored.
///
/// # Example
///
/// ```rust
/// use viberante::{HtmlRenderer, VisualBlock};
///
/// let renderer = HtmlRenderer::new().unwrap();
/// let html = renderer
///     .render(&VisualBlock::new().padding("small").attr("id", "hero").child("Hi").build())
///     .unwrap();
///
/// assert!(html.starts_with("<div class=\"viberante-visual-block padding-small"));
/// assert!(html.contains("style=\"padding: 8px; margin: 0;"));
/// assert!(html.ends_with(" id=\"hero\">Hi</div>"));
/// ```
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    /// Creates a renderer with the element template registered.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(ELEMENT_TEMPLATE_NAME, ELEMENT_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders an element and its children.
    ///
    /// # Errors
    ///
    /// Returns an error if a tag or attribute name in the tree is not valid
    /// HTML, or if template rendering fails.
    pub fn render(&self, element: &Element) -> Result<String, RenderError> {
        let tag = element.tag();
        if !is_valid_tag_name(tag) {
            return Err(RenderError::InvalidTag(tag.to_string()));
        }
        if let Some(name) = element
            .attributes()
            .keys()
            .find(|name| !is_valid_attribute_name(name))
        {
            return Err(RenderError::InvalidAttribute {
                tag: tag.to_string(),
                name: name.clone(),
            });
        }

        let void = is_void_element(tag);
        if void && !element.children().is_empty() {
            tracing::debug!(tag, "ignoring children of void element");
        }
        let children = if void {
            Vec::new()
        } else {
            element
                .children()
                .iter()
                .map(|child| match child {
                    Node::Text(text) => Ok(Value::from(text.as_str())),
                    Node::Element(inner) => self.render(inner).map(Value::from_safe_string),
                })
                .collect::<Result<Vec<_>, RenderError>>()?
        };
        let attributes: Vec<(&str, &str)> = element
            .attributes()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();

        tracing::trace!(tag, children = children.len(), "rendering element");
        let tmpl = self.env.get_template(ELEMENT_TEMPLATE_NAME)?;
        let html = tmpl.render(context! {
            tag => tag,
            class_name => element.class_name(),
            style => element.style().to_css(),
            attributes => attributes,
            void => void,
            children => Value::from(children),
        })?;
        Ok(html)
    }

    /// Builds a block and renders the resulting element.
    pub fn render_block(&self, block: VisualBlock) -> Result<String, RenderError> {
        self.render(&block.build())
    }
}

/// Renders an element with a one-off renderer.
pub fn render_html(element: &Element) -> Result<String, RenderError> {
    HtmlRenderer::new()?.render(element)
}
