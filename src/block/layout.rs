//! Layout presets built on [`VisualBlock`]: flex rows/columns, grids and spacers.

use crate::style::StyleRecord;
use crate::tokens::{GAP, SPACING};

use super::element::{Element, Node};
use super::visual::VisualBlock;

pub const DEFAULT_GRID_COLUMNS: &str = "1fr 1fr";
pub const DEFAULT_GRID_GAP: &str = "medium";
pub const DEFAULT_SPACER_SIZE: &str = "medium";

/// A block preset for flexbox layouts.
///
/// # Example
///
/// ```rust
/// use viberante::Flex;
///
/// let column = Flex::column().gap("small").align_items("center").build();
/// assert_eq!(column.style().get("display"), Some("flex"));
/// assert_eq!(column.style().get("flexDirection"), Some("column"));
/// assert_eq!(column.style().get("gap"), Some("8px"));
/// ```
pub struct Flex;

impl Flex {
    /// A flex container laid out in a row.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> VisualBlock {
        Self::with_direction("row")
    }

    pub fn column() -> VisualBlock {
        Self::with_direction("column")
    }

    pub fn with_direction(direction: impl Into<String>) -> VisualBlock {
        VisualBlock::new().display("flex").flex_direction(direction)
    }
}

/// Grid template settings carried by a grid block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridTemplate {
    pub(crate) columns: String,
    pub(crate) rows: Option<String>,
    pub(crate) gap: String,
}

impl Default for GridTemplate {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GRID_COLUMNS.to_string(),
            rows: None,
            gap: DEFAULT_GRID_GAP.to_string(),
        }
    }
}

impl GridTemplate {
    pub(crate) fn style(&self) -> StyleRecord {
        let mut style = StyleRecord::new();
        style.set("gridTemplateColumns", self.columns.as_str());
        style.set_opt("gridTemplateRows", self.rows.as_deref());
        style.set("gap", GAP.resolve(&self.gap));
        style
    }
}

/// A block preset for CSS grid layouts.
///
/// Columns default to `1fr 1fr` and the gap to `medium` on the gap scale.
/// Raw style overrides on the block take precedence over the grid styles.
/// The template only applies while the display mode is `grid` or
/// `inline-grid`.
///
/// # Example
///
/// ```rust
/// use viberante::Grid;
///
/// let grid = Grid::new().columns("repeat(3, 1fr)").gap("large").build();
/// assert_eq!(grid.style().get("display"), Some("grid"));
/// assert_eq!(grid.style().get("gridTemplateColumns"), Some("repeat(3, 1fr)"));
/// assert_eq!(grid.style().get("gap"), Some("32px"));
/// ```
pub struct Grid;

impl Grid {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> VisualBlock {
        let mut block = VisualBlock::new().display("grid");
        block.grid = Some(GridTemplate::default());
        block
    }
}

impl VisualBlock {
    /// Sets the flex direction; shorthand for [`flex_direction`](Self::flex_direction).
    pub fn direction(self, direction: impl Into<String>) -> Self {
        self.flex_direction(direction)
    }

    /// Sets the grid column template. Only blocks created with [`Grid::new`]
    /// carry a template; on any other block this does nothing.
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        match self.grid.as_mut() {
            Some(grid) => grid.columns = columns.into(),
            None => tracing::debug!("ignoring grid columns on a non-grid block"),
        }
        self
    }

    /// Sets the grid row template. Ignored outside [`Grid`] blocks.
    pub fn rows(mut self, rows: impl Into<String>) -> Self {
        match self.grid.as_mut() {
            Some(grid) => grid.rows = Some(rows.into()),
            None => tracing::debug!("ignoring grid rows on a non-grid block"),
        }
        self
    }
}

/// Spacer orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

/// Empty space between blocks.
///
/// The size (a spacing token or literal) applies along the axis; the cross
/// axis is `1px`.
///
/// # Example
///
/// ```rust
/// use viberante::{Axis, Spacer};
///
/// let gap = Spacer::new().size("large").axis(Axis::Horizontal).build();
/// assert_eq!(gap.tag(), "span");
/// assert_eq!(gap.style().get("width"), Some("32px"));
/// assert_eq!(gap.style().get("height"), Some("1px"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spacer {
    size: String,
    axis: Axis,
}

impl Default for Spacer {
    fn default() -> Self {
        Self {
            size: DEFAULT_SPACER_SIZE.to_string(),
            axis: Axis::Vertical,
        }
    }
}

impl Spacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn build(self) -> Element {
        let size = SPACING.resolve(&self.size);
        let (main, cross) = match self.axis {
            Axis::Horizontal => (("width", "minWidth"), ("height", "minHeight")),
            Axis::Vertical => (("height", "minHeight"), ("width", "minWidth")),
        };
        let style = StyleRecord::new()
            .with("display", "block")
            .with(main.0, size.as_ref())
            .with(main.1, size.as_ref())
            .with(cross.0, "1px")
            .with(cross.1, "1px");
        Element::new("span").with_style(style)
    }
}

impl From<Spacer> for Node {
    fn from(spacer: Spacer) -> Self {
        Node::Element(spacer.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flex_row_default() {
        let element = Flex::new().build();
        assert_eq!(element.style().get("display"), Some("flex"));
        assert_eq!(element.style().get("flexDirection"), Some("row"));
    }

    #[test]
    fn test_flex_direction_override() {
        let element = Flex::new().direction("row-reverse").build();
        assert_eq!(element.style().get("flexDirection"), Some("row-reverse"));
    }

    #[test]
    fn test_grid_defaults() {
        let element = Grid::new().build();
        let style = element.style();
        assert_eq!(style.get("display"), Some("grid"));
        assert_eq!(style.get("gridTemplateColumns"), Some("1fr 1fr"));
        assert_eq!(style.get("gap"), Some("16px"));
        assert!(!style.contains("gridTemplateRows"));
        assert!(!style.contains("flexDirection"));
    }

    #[test]
    fn test_grid_rows_and_literal_gap() {
        let element = Grid::new().rows("auto 1fr").gap("xlarge").build();
        assert_eq!(element.style().get("gridTemplateRows"), Some("auto 1fr"));
        // xlarge is not on the gap scale
        assert_eq!(element.style().get("gap"), Some("xlarge"));
    }

    #[test]
    fn test_grid_style_overrides_win() {
        let element = Grid::new().style("gap", "2px").build();
        assert_eq!(element.style().get("gap"), Some("2px"));
    }

    #[test]
    fn test_grid_keeps_block_props() {
        let element = Grid::new().padding("small").class_name("cards").build();
        assert_eq!(element.style().get("padding"), Some("8px"));
        assert!(element.has_class("cards"));
    }

    #[test]
    fn test_template_setters_ignored_outside_grid() {
        let style = VisualBlock::new().columns("1fr").rows("auto").build().style().clone();
        assert_eq!(style.get("display"), Some("block"));
        assert!(!style.contains("gridTemplateColumns"));
        assert!(!style.contains("gridTemplateRows"));
        assert!(!style.contains("gap"));
    }

    #[test]
    fn test_flex_gap_independent_of_call_order() {
        let gap_first = Flex::new().gap("xlarge").columns("1fr").build();
        let gap_last = Flex::new().columns("1fr").gap("xlarge").build();
        assert_eq!(gap_first.style().get("gap"), Some("64px"));
        assert_eq!(gap_last.style(), gap_first.style());
        assert!(!gap_last.style().contains("gridTemplateColumns"));
    }

    #[test]
    fn test_grid_gap_independent_of_call_order() {
        let gap_first = Grid::new().gap("small").columns("1fr 3fr").build();
        let gap_last = Grid::new().columns("1fr 3fr").gap("small").build();
        assert_eq!(gap_first.style().get("gap"), Some("8px"));
        assert_eq!(gap_last.style(), gap_first.style());
    }

    #[test]
    fn test_grid_template_dropped_when_display_changes() {
        let style = Grid::new().display("block").build().style().clone();
        assert_eq!(style.get("display"), Some("block"));
        assert!(!style.contains("gridTemplateColumns"));
        assert!(!style.contains("gap"));

        let inline = Grid::new().display("inline-grid").build();
        assert_eq!(inline.style().get("gridTemplateColumns"), Some("1fr 1fr"));
    }

    #[test]
    fn test_spacer_vertical_default() {
        let element = Spacer::new().build();
        let style = element.style();
        assert_eq!(style.get("display"), Some("block"));
        assert_eq!(style.get("height"), Some("16px"));
        assert_eq!(style.get("minHeight"), Some("16px"));
        assert_eq!(style.get("width"), Some("1px"));
        assert_eq!(style.get("minWidth"), Some("1px"));
    }

    #[test]
    fn test_spacer_literal_size() {
        let element = Spacer::new().size("3rem").axis(Axis::Horizontal).build();
        assert_eq!(element.style().get("minWidth"), Some("3rem"));
    }

    #[test]
    fn test_spacer_none_collapses() {
        let element = Spacer::new().size("none").build();
        assert_eq!(element.style().get("height"), Some("0"));
        assert_eq!(element.style().get("width"), Some("1px"));
    }
}
