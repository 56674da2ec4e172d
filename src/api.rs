use log::{info, warn};

use crate::config::MapConfig;
use crate::errors::{GeoDeckError, GeoDeckResult};
use crate::geometry::{aggregate, BoundingBox, Centroid, ZoomEstimator, ZoomLevel};
use crate::input::{FeatureReader, PropertyInspector};
use crate::render::{write_artifact, DeckHtmlRenderer, LayerConfig, MapOptions, MapRenderer, ViewState};

/// Where the zoom level of a summary came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomSource {
    /// Fitted to the data extent
    Estimated,
    /// The configured fallback, used because the extent was degenerate
    Fallback,
}

/// Extent and initial zoom derived from a feature collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSummary {
    pub feature_count: usize,
    pub bounds: BoundingBox,
    pub centroid: Centroid,
    pub zoom: ZoomLevel,
    pub zoom_source: ZoomSource,
}

/// Main interface to the geodeck library
pub struct GeoDeck {
    config: MapConfig,
}

impl GeoDeck {
    /// Create a new GeoDeck instance
    ///
    /// # Arguments
    /// * `config` - Surface size, view limits and page settings
    pub fn new(config: MapConfig) -> Self {
        GeoDeck { config }
    }

    /// Create an instance with the built-in configuration
    pub fn with_defaults() -> GeoDeckResult<Self> {
        Ok(GeoDeck::new(MapConfig::defaults()?))
    }

    /// Compute bounds, centroid and zoom for the features of `reader`
    ///
    /// # Returns
    /// The summary, or `EmptyInputError` / `InputFormatError` from
    /// aggregation, or `DegenerateBoundsError` when the extent cannot be
    /// fitted and no fallback zoom is configured
    pub fn map_summary(&self, reader: &FeatureReader) -> GeoDeckResult<MapSummary> {
        let geometries = reader.geometries()?;
        let (bounds, centroid) = aggregate(&geometries)?;

        let estimator = ZoomEstimator::new(self.config.surface.width, self.config.surface.height)?;
        let (zoom, zoom_source) = match estimator.estimate(&bounds) {
            Ok(zoom) => (zoom, ZoomSource::Estimated),
            Err(GeoDeckError::DegenerateBoundsError(reason)) => match self.config.view.fallback_zoom {
                Some(zoom) => {
                    warn!("{}; using fallback zoom {}", reason, zoom);
                    (zoom, ZoomSource::Fallback)
                }
                None => return Err(GeoDeckError::DegenerateBoundsError(reason)),
            },
            Err(e) => return Err(e),
        };

        Ok(MapSummary {
            feature_count: geometries.len(),
            bounds,
            centroid,
            zoom,
            zoom_source,
        })
    }

    /// Render the map for `input_path` to `output_path` as a deck.gl page
    pub fn render_map(&self, input_path: &str, output_path: &str, options: &MapOptions) -> GeoDeckResult<MapSummary> {
        let renderer = DeckHtmlRenderer::new(&self.config.page);
        self.render_map_with(input_path, output_path, options, &renderer)
    }

    /// Render the map for `input_path` to `output_path` with any renderer
    ///
    /// Nothing is written unless every step, including rendering, succeeds.
    pub fn render_map_with<R: MapRenderer>(&self,
                                           input_path: &str,
                                           output_path: &str,
                                           options: &MapOptions,
                                           renderer: &R) -> GeoDeckResult<MapSummary> {
        options.validate()?;

        let reader = FeatureReader::load(input_path)?;
        let summary = self.map_summary(&reader)?;
        info!("Fitted {} features: bounds={:?} centroid=({:.6}, {:.6}) zoom={:.4}",
              summary.feature_count, summary.bounds.as_tuple(),
              summary.centroid.x, summary.centroid.y, summary.zoom);

        let layer = LayerConfig::new(reader.collection(), options, self.config.layer.elevation_range);
        let view = ViewState::new(summary.centroid, summary.zoom, &self.config.view, options);
        let document = renderer.render(&layer, &view)?;

        write_artifact(output_path, &document)?;
        info!("Map written to {}", output_path);
        Ok(summary)
    }

    /// Collect the property keys of every feature in `input_path`
    pub fn inspect_properties(input_path: &str) -> GeoDeckResult<PropertyInspector> {
        let reader = FeatureReader::load(input_path)?;
        let mut inspector = PropertyInspector::new();
        for properties in reader.properties()? {
            inspector.add(properties);
        }
        Ok(inspector)
    }

    /// Sorted, distinct property keys across the features of `input_path`
    pub fn list_properties(input_path: &str) -> GeoDeckResult<Vec<String>> {
        Ok(Self::inspect_properties(input_path)?.keys())
    }
}
