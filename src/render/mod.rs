//! HTML rendering of built elements through MiniJinja.

mod renderer;

pub use renderer::{render_html, HtmlRenderer};
