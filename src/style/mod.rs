//! Style resolution for visual blocks.
//!
//! This module provides the core styling primitives:
//!
//! - [`BlockProps`]: The declarative prop set of a block
//! - [`StyleRecord`]: The ordered property map handed to the rendering layer
//! - [`resolve_style`]: The assembler turning props into a record
//!
//! Resolution is a pure function of the props. Nothing is cached and no
//! input makes it fail.

mod assemble;
mod props;
mod record;

pub use assemble::resolve_style;
pub use props::{
    BlockProps, ChildProps, DEFAULT_BORDER_RADIUS, DEFAULT_BORDER_WIDTH, DEFAULT_DISPLAY,
    DEFAULT_MARGIN, DEFAULT_PADDING, DEFAULT_SHADOW, DEFAULT_TAG,
};
pub use record::StyleRecord;
