//! Map assembly and HTML output
//!
//! Layer and view state are plain serializable data; a `MapRenderer`
//! turns them into the final artifact.

pub mod options;
pub mod layer;
pub mod view;
pub mod renderer;
pub mod deck_html;
pub mod output;
#[cfg(test)]
mod tests;

pub use options::{LayerType, MapOptions, Rgb};
pub use layer::LayerConfig;
pub use view::ViewState;
pub use renderer::MapRenderer;
pub use deck_html::DeckHtmlRenderer;
pub use output::write_artifact;
