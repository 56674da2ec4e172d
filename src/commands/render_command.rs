//! Map rendering command
//!
//! This module implements the command that turns a GeoJSON
//! FeatureCollection into a deck.gl HTML page.

use clap::ArgMatches;
use log::{debug, info};

use crate::api::{GeoDeck, ZoomSource};
use crate::commands::command_traits::Command;
use crate::config::MapConfig;
use crate::errors::{GeoDeckError, GeoDeckResult};
use crate::render::{LayerType, MapOptions, Rgb};
use crate::utils::logger::Logger;

/// Command for rendering a map
pub struct RenderCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output HTML file
    output_file: String,
    /// Styling and camera options
    options: MapOptions,
    /// Optional configuration override file
    config_file: Option<String>,
    /// Surface size overrides from the command line
    width: Option<f64>,
    height: Option<f64>,
    /// Logger for recording operations
    logger: &'a Logger,
}

fn string_arg(args: &ArgMatches, id: &str) -> GeoDeckResult<String> {
    args.get_one::<String>(id)
        .cloned()
        .ok_or_else(|| GeoDeckError::ConfigurationError(format!("Missing argument --{}", id)))
}

fn f64_arg(args: &ArgMatches, id: &str) -> GeoDeckResult<f64> {
    args.get_one::<f64>(id)
        .copied()
        .ok_or_else(|| GeoDeckError::ConfigurationError(format!("Missing argument --{}", id)))
}

fn bool_arg(args: &ArgMatches, id: &str) -> GeoDeckResult<bool> {
    args.get_one::<bool>(id)
        .copied()
        .ok_or_else(|| GeoDeckError::ConfigurationError(format!("Missing argument --{}", id)))
}

fn color_arg(args: &ArgMatches, id: &str) -> GeoDeckResult<Rgb> {
    let channels: Vec<u8> = args.get_many::<u8>(id)
        .ok_or_else(|| GeoDeckError::ConfigurationError(format!("Missing argument --{}", id)))?
        .copied()
        .collect();
    Rgb::from_slice(&channels)
}

impl<'a> RenderCommand<'a> {
    /// Create a new render command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new RenderCommand instance, or `ConfigurationError` if an option
    /// is out of range
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoDeckResult<Self> {
        let input_file = string_arg(args, "input")?;
        let output_file = string_arg(args, "output")?;

        let options = MapOptions {
            layer_type: string_arg(args, "layer-type")?.parse::<LayerType>()?,
            elevation_property: string_arg(args, "elevation-property")?,
            elevation_scale: f64_arg(args, "elevation-scale")?,
            fill_color: color_arg(args, "fill-color")?,
            line_color: color_arg(args, "line-color")?,
            auto_highlight: bool_arg(args, "auto-highlight")?,
            pickable: bool_arg(args, "pickable")?,
            stroked: bool_arg(args, "stroked")?,
            filled: bool_arg(args, "filled")?,
            wireframe: bool_arg(args, "wireframe")?,
            extruded: bool_arg(args, "extruded")?,
            coverage: f64_arg(args, "coverage")?,
            pitch: f64_arg(args, "pitch")?,
            bearing: f64_arg(args, "bearing")?,
        };
        options.validate()?;

        Ok(RenderCommand {
            input_file,
            output_file,
            options,
            config_file: args.get_one::<String>("config").cloned(),
            width: args.get_one::<f64>("width").copied(),
            height: args.get_one::<f64>("height").copied(),
            logger,
        })
    }

    /// Load the configuration and apply command-line surface overrides
    fn resolve_config(&self) -> GeoDeckResult<MapConfig> {
        let mut config = MapConfig::load(self.config_file.as_deref())?;
        if let Some(width) = self.width {
            config.surface.width = width;
        }
        if let Some(height) = self.height {
            config.surface.height = height;
        }
        config.validate()?;

        let mut settings: Vec<_> = config.describe().into_iter().collect();
        settings.sort();
        for (key, value) in settings {
            debug!("  {} = {}", key, value);
        }
        Ok(config)
    }
}

impl<'a> Command for RenderCommand<'a> {
    fn execute(&self) -> GeoDeckResult<()> {
        info!("Rendering {} to {} as a {}", self.input_file, self.output_file, self.options.layer_type);

        let geodeck = GeoDeck::new(self.resolve_config()?);
        let summary = geodeck.render_map(&self.input_file, &self.output_file, &self.options)?;

        if summary.zoom_source == ZoomSource::Fallback {
            info!("Data has no extent; the configured fallback zoom was used");
        }

        self.logger.log(&format!(
            "Rendered {} features from {} to {} (center {:.6},{:.6}, zoom {:.4})",
            summary.feature_count, self.input_file, self.output_file,
            summary.centroid.x, summary.centroid.y, summary.zoom
        ))?;

        Ok(())
    }
}
