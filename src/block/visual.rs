//! The visual block builder.

use std::borrow::Cow;

use crate::class_names::block_class_name;
use crate::style::{resolve_style, BlockProps, ChildProps, StyleRecord};

use super::element::{Element, Node};
use super::layout::GridTemplate;
use super::node_ref::NodeRef;

/// A customizable container: the building block every other component
/// specializes.
///
/// Set props with the fluent methods, then call [`build`](Self::build) to get
/// the resolved [`Element`].
///
/// # Example
///
/// ```rust
/// use viberante::VisualBlock;
///
/// let card = VisualBlock::new()
///     .padding("small")
///     .shadow("large")
///     .background_color("#fff")
///     .display("flex")
///     .justify_content("center")
///     .child("Hello")
///     .build();
///
/// assert_eq!(card.style().get("padding"), Some("8px"));
/// assert_eq!(card.style().get("flexDirection"), Some("row"));
/// assert!(card.has_class("padding-small shadow-large has-background"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VisualBlock {
    pub(crate) props: BlockProps,
    pub(crate) grid: Option<GridTemplate>,
    children: Vec<Node>,
    node_ref: Option<NodeRef>,
}

impl VisualBlock {
    /// Creates a block with default props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a block from a prop set. Children declared in the props are
    /// built into child nodes.
    pub fn from_props(mut props: BlockProps) -> Self {
        let children = std::mem::take(&mut props.children)
            .into_iter()
            .map(|child| match child {
                ChildProps::Text(text) => Node::Text(text),
                ChildProps::Block(block) => Node::Element(VisualBlock::from_props(*block).build()),
            })
            .collect();
        Self {
            props,
            grid: None,
            children,
            node_ref: None,
        }
    }

    pub fn props(&self) -> &BlockProps {
        &self.props
    }

    /// The element tag to render, `div` by default.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.props.tag = tag.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.props.class_name = class_name.into();
        self
    }

    /// Adds a raw style override. Resolved props take precedence over it.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.style.set(property, value);
        self
    }

    /// Replaces all raw style overrides.
    pub fn styles(mut self, style: StyleRecord) -> Self {
        self.props.style = style;
        self
    }

    pub fn padding(mut self, padding: impl Into<String>) -> Self {
        self.props.padding = padding.into();
        self
    }

    pub fn margin(mut self, margin: impl Into<String>) -> Self {
        self.props.margin = margin.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.props.background_color = Some(color.into());
        self
    }

    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.props.border_color = Some(color.into());
        self
    }

    pub fn border_width(mut self, width: impl Into<String>) -> Self {
        self.props.border_width = width.into();
        self
    }

    pub fn border_radius(mut self, radius: impl Into<String>) -> Self {
        self.props.border_radius = radius.into();
        self
    }

    pub fn shadow(mut self, shadow: impl Into<String>) -> Self {
        self.props.shadow = shadow.into();
        self
    }

    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.props.display = display.into();
        self
    }

    pub fn flex_direction(mut self, direction: impl Into<String>) -> Self {
        self.props.flex_direction = Some(direction.into());
        self
    }

    pub fn justify_content(mut self, justify: impl Into<String>) -> Self {
        self.props.justify_content = Some(justify.into());
        self
    }

    pub fn align_items(mut self, align: impl Into<String>) -> Self {
        self.props.align_items = Some(align.into());
        self
    }

    /// Sets the gap. On a block created with [`Grid::new`](crate::Grid::new)
    /// this is the grid gap (resolved against the gap scale); otherwise it is
    /// the flex gap.
    pub fn gap(mut self, gap: impl Into<String>) -> Self {
        match self.grid.as_mut() {
            Some(grid) => grid.gap = gap.into(),
            None => self.props.gap = Some(gap.into()),
        }
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.props.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.props.height = Some(height.into());
        self
    }

    /// Forwards an attribute to the rendered element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.attributes.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Attaches a handle that receives the built element.
    pub fn node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    /// The props the resolver sees: on a grid block the template styles are
    /// seeded under the caller's own overrides.
    fn effective_props(&self) -> Cow<'_, BlockProps> {
        match &self.grid {
            Some(grid) if self.props.is_grid() => {
                let mut props = self.props.clone();
                let mut style = grid.style();
                style.merge(&props.style);
                props.style = style;
                Cow::Owned(props)
            }
            _ => Cow::Borrowed(&self.props),
        }
    }

    /// Resolves the block's style record without building it.
    pub fn resolve_style(&self) -> StyleRecord {
        resolve_style(&self.effective_props())
    }

    /// Resolves the block's class string without building it.
    pub fn resolve_class_name(&self) -> String {
        block_class_name(&self.props)
    }

    /// Resolves the block into an element.
    pub fn build(self) -> Element {
        let style = self.resolve_style();
        let class_name = self.resolve_class_name();
        let element = Element::new(self.props.tag)
            .with_class_name(class_name)
            .with_style(style)
            .with_attributes(self.props.attributes)
            .with_children(self.children);
        if let Some(node_ref) = &self.node_ref {
            node_ref.set(&element);
        }
        element
    }
}

impl From<VisualBlock> for Node {
    fn from(block: VisualBlock) -> Self {
        Node::Element(block.build())
    }
}

impl From<BlockProps> for VisualBlock {
    fn from(props: BlockProps) -> Self {
        VisualBlock::from_props(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::SHADOW;

    #[test]
    fn test_default_block() {
        let element = VisualBlock::new().build();
        assert_eq!(element.tag(), "div");
        assert_eq!(
            element.class_name(),
            "viberante-visual-block padding-medium margin-none shadow-none"
        );
        assert_eq!(element.style().get("padding"), Some("16px"));
        assert!(element.children().is_empty());
    }

    #[test]
    fn test_end_to_end_example() {
        let element = VisualBlock::new()
            .padding("small")
            .shadow("large")
            .background_color("#fff")
            .display("flex")
            .justify_content("center")
            .build();

        let style = element.style();
        assert_eq!(style.get("padding"), Some("8px"));
        assert_eq!(style.get("boxShadow"), SHADOW.get("large"));
        assert_eq!(style.get("backgroundColor"), Some("#fff"));
        assert_eq!(style.get("display"), Some("flex"));
        assert_eq!(style.get("flexDirection"), Some("row"));
        assert_eq!(style.get("justifyContent"), Some("center"));
        assert!(element.has_class("padding-small"));
        assert!(element.has_class("shadow-large"));
        assert!(element.has_class("has-background"));
    }

    #[test]
    fn test_attributes_forwarded() {
        let element = VisualBlock::new()
            .tag("section")
            .attr("id", "hero")
            .attr("aria-label", "Hero")
            .build();
        assert_eq!(element.tag(), "section");
        assert_eq!(element.attribute("id"), Some("hero"));
        assert_eq!(element.attribute("aria-label"), Some("Hero"));
    }

    #[test]
    fn test_children_nest() {
        let element = VisualBlock::new()
            .child("title")
            .child(VisualBlock::new().padding("none"))
            .children(["a", "b"])
            .build();
        assert_eq!(element.children().len(), 4);
        match &element.children()[1] {
            Node::Element(inner) => assert_eq!(inner.style().get("padding"), Some("0")),
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_from_props_builds_children() {
        let mut inner = BlockProps::default();
        inner.children.push(ChildProps::Text("deep".into()));
        let props = BlockProps {
            children: vec![ChildProps::Text("top".into()), ChildProps::Block(Box::new(inner))],
            ..BlockProps::default()
        };
        let block = VisualBlock::from(props);
        assert!(block.props().children.is_empty());

        let element = block.build();
        assert_eq!(element.children()[0], Node::Text("top".into()));
        match &element.children()[1] {
            Node::Element(inner) => assert_eq!(inner.children(), &[Node::Text("deep".into())]),
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_node_ref_receives_element() {
        let handle = NodeRef::new();
        let element = VisualBlock::new().padding("large").node_ref(&handle).build();
        assert_eq!(handle.get(), Some(element));
    }

    #[test]
    fn test_resolve_without_build() {
        let block = VisualBlock::new().margin("small").class_name("x");
        assert_eq!(block.resolve_style().get("margin"), Some("8px"));
        assert!(block.resolve_class_name().ends_with(" x"));
    }
}
