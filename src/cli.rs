//! Command-line definitions for the geodeck programs

use clap::builder::{BoolishValueParser, PossibleValuesParser};
use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};

use crate::render::LayerType;

fn bool_arg(id: &'static str, default: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .help(help)
        .value_name("BOOL")
        .value_parser(BoolishValueParser::new())
        .default_value(default)
        .action(ArgAction::Set)
}

fn color_arg(id: &'static str, defaults: [&'static str; 3], help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .help(help)
        .value_names(["R", "G", "B"])
        .num_args(3)
        .value_parser(value_parser!(u8))
        .default_values(defaults)
        .action(ArgAction::Set)
}

fn float_arg(id: &'static str, default: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .help(help)
        .value_name("FLOAT")
        .value_parser(value_parser!(f64))
        .default_value(default)
        .allow_negative_numbers(true)
}

fn common_args(command: ClapCommand) -> ClapCommand {
    command
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Append a record of completed operations to this file")
                .value_name("FILE")
                .required(false),
        )
}

/// Arguments of the `geodeck` map renderer
pub fn build_render_cli() -> ClapCommand {
    let command = ClapCommand::new("geodeck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create a 3D map from a GeoJSON FeatureCollection")
        .arg(
            Arg::new("input")
                .help("Input GeoJSON file")
                .value_name("INPUT_FILE")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output HTML file")
                .value_name("OUTPUT_FILE")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("elevation-property")
                .long("elevation-property")
                .help("Name of the feature property that contains the elevation values")
                .value_name("NAME")
                .default_value("elevation"),
        )
        .arg(
            Arg::new("layer-type")
                .long("layer-type")
                .help("Type of layer to display on the map")
                .value_name("TYPE")
                .value_parser(PossibleValuesParser::new(LayerType::NAMES))
                .default_value("GeoJsonLayer"),
        )
        .arg(float_arg("elevation-scale", "1.0", "Elevation scale of the layer"))
        .arg(color_arg("fill-color", ["255", "0", "0"], "Fill color of the layer (R G B)"))
        .arg(color_arg("line-color", ["0", "0", "255"], "Line color of the layer (R G B)"))
        .arg(bool_arg("auto-highlight", "true", "Highlight map elements when hovered over"))
        .arg(bool_arg("pickable", "true", "Make map elements selectable when clicked"))
        .arg(bool_arg("stroked", "false", "Draw polygon outlines"))
        .arg(bool_arg("filled", "true", "Fill polygons"))
        .arg(bool_arg("wireframe", "true", "Draw extruded polygons as wireframes"))
        .arg(bool_arg("extruded", "true", "Render map elements in three dimensions"))
        .arg(float_arg("coverage", "1.0", "Ratio (0.0 to 1.0) of each cell covered by its element"))
        .arg(float_arg("pitch", "45.0", "View tilt in degrees, from 0 to 90"))
        .arg(float_arg("bearing", "0.0", "Degrees from true north the map is rotated, from 0 up to 360"))
        .arg(
            Arg::new("width")
                .long("width")
                .help("Width in pixels the initial view is fitted to")
                .value_name("PX")
                .value_parser(value_parser!(f64))
                .required(false),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .help("Height in pixels the initial view is fitted to")
                .value_name("PX")
                .value_parser(value_parser!(f64))
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the built-in map defaults")
                .value_name("FILE")
                .required(false),
        );
    common_args(command)
}

/// Arguments of the `geodeck-properties` inspector
pub fn build_properties_cli() -> ClapCommand {
    let command = ClapCommand::new("geodeck-properties")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Show the available GeoJSON properties of an input file")
        .arg(
            Arg::new("input")
                .help("Input GeoJSON file")
                .value_name("INPUT_FILE")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("properties")
                .long("properties")
                .help("Show the available GeoJSON properties")
                .action(ArgAction::SetTrue),
        );
    common_args(command)
}
