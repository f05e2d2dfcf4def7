//! Feed module
//!
//! HTML rendering of essay cards.

pub mod renderer;

pub use renderer::{render_articles, render_error, RenderOptions};
