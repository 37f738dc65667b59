//! # Viberante - design-token styling for visual building blocks
//!
//! Viberante resolves a declarative set of design-token props (padding,
//! margin, colors, border, radius, shadow, layout) into a concrete style
//! record and class string, and builds the element a visual block renders
//! into.
//!
//! ## Concepts
//!
//! - **Tokens**: Symbolic names such as `"small"` or `"pill"` looked up in
//!   fixed tables ([`tokens`]). Anything that is not a token is used as a
//!   literal CSS value.
//! - **Colors**: Background and border colors are only applied when
//!   [`is_valid_color`] accepts them; anything else is silently dropped.
//! - **Style record**: The resolved, ordered property map ([`StyleRecord`]).
//!   It never holds an absent value.
//! - **Class string**: A base class, token fragments (`padding-small`,
//!   `shadow-large`, `has-background`) and the caller's classes.
//!
//! Resolution is pure and never fails. Errors only come from the edges:
//! rendering HTML ([`RenderError`]) and loading props files ([`PropsError`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use viberante::{HtmlRenderer, VisualBlock};
//!
//! let card = VisualBlock::new()
//!     .padding("small")
//!     .shadow("large")
//!     .background_color("#fff")
//!     .display("flex")
//!     .justify_content("center")
//!     .child("Hello")
//!     .build();
//!
//! assert_eq!(card.style().get("padding"), Some("8px"));
//! assert_eq!(card.style().get("justifyContent"), Some("center"));
//! assert!(card.has_class("has-background"));
//!
//! let html = HtmlRenderer::new().unwrap().render(&card).unwrap();
//! assert!(html.ends_with(">Hello</div>"));
//! ```
//!
//! ## Layout presets
//!
//! [`Flex`], [`Grid`] and [`Spacer`] preconfigure blocks for common layouts:
//!
//! ```rust
//! use viberante::{Flex, Grid, Spacer};
//!
//! let page = Flex::column()
//!     .gap("large")
//!     .child(Grid::new().columns("1fr 2fr"))
//!     .child(Spacer::new().size("xlarge"))
//!     .build();
//! assert_eq!(page.children().len(), 2);
//! ```
//!
//! ## Props documents
//!
//! Blocks can be described in JSON or YAML with the component's camelCase
//! prop names; see [`BlockProps::from_path`].

mod block;
mod class_names;
mod color;
mod config;
mod error;
mod render;
mod style;
pub mod tokens;
mod util;

pub use block::{
    Axis, Element, Flex, Grid, Node, NodeRef, Spacer, VisualBlock, DEFAULT_GRID_COLUMNS,
    DEFAULT_GRID_GAP, DEFAULT_SPACER_SIZE,
};
pub use class_names::{block_class_name, class_names, BASE_CLASS};
pub use color::{is_valid_color, is_valid_color_value};
pub use config::PropsFormat;
pub use error::{PropsError, RenderError};
pub use render::{render_html, HtmlRenderer};
pub use style::{
    resolve_style, BlockProps, ChildProps, StyleRecord, DEFAULT_BORDER_RADIUS,
    DEFAULT_BORDER_WIDTH, DEFAULT_DISPLAY, DEFAULT_MARGIN, DEFAULT_PADDING, DEFAULT_SHADOW,
    DEFAULT_TAG,
};
pub use util::{css_property_name, is_valid_attribute_name, is_valid_tag_name};
