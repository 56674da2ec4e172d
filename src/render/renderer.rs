//! Renderer interface

use crate::errors::GeoDeckResult;
use super::layer::LayerConfig;
use super::view::ViewState;

/// Turns a layer and an initial view into a complete output document
///
/// Implementations must either return the whole document or an error;
/// the caller writes nothing on error.
pub trait MapRenderer {
    /// Render the document
    ///
    /// # Arguments
    /// * `layer` - The data layer to display
    /// * `view` - The initial camera position
    fn render(&self, layer: &LayerConfig<'_>, view: &ViewState) -> GeoDeckResult<String>;
}
