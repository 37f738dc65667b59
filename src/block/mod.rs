//! Visual blocks and the elements they build.
//!
//! - [`VisualBlock`]: The customizable container
//! - [`Flex`], [`Grid`], [`Spacer`]: Layout presets
//! - [`Element`] / [`Node`]: The resolved element tree
//! - [`NodeRef`]: A handle receiving a block's built element

mod element;
mod layout;
mod node_ref;
mod visual;

pub use element::{Element, Node};
pub use layout::{
    Axis, Flex, Grid, Spacer, DEFAULT_GRID_COLUMNS, DEFAULT_GRID_GAP, DEFAULT_SPACER_SIZE,
};
pub use node_ref::NodeRef;
pub use visual::VisualBlock;
