//! Rendering: self-contained HTML previews of a message and its chart.

pub mod html;

pub use html::render_html_preview;
