//! HTML rendering of the Sankey diagram.

pub mod html;

pub use html::render_sankey_html;
