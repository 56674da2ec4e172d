//! Property listing command

use std::io::{self, Write};

use clap::ArgMatches;
use log::{info, warn};

use crate::api::GeoDeck;
use crate::commands::command_traits::Command;
use crate::errors::{GeoDeckError, GeoDeckResult};
use crate::utils::logger::Logger;

/// Command for listing the property keys of a GeoJSON file
pub struct PropertiesCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether `--properties` was given
    show_properties: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> PropertiesCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoDeckResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| GeoDeckError::ConfigurationError("Missing input file".to_string()))?
            .clone();

        Ok(PropertiesCommand {
            input_file,
            show_properties: args.get_flag("properties"),
            logger,
        })
    }

    /// Write the property report to `out`
    ///
    /// Writes nothing when `--properties` was not given.
    pub fn write_report<W: Write>(&self, out: &mut W) -> GeoDeckResult<()> {
        if !self.show_properties {
            warn!("Nothing to do for {}: pass --properties to list the feature properties", self.input_file);
            return Ok(());
        }

        let inspector = GeoDeck::inspect_properties(&self.input_file)?;
        out.write_all(inspector.report().as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| GeoDeckError::output("<stdout>", e))?;

        info!("Listed {} properties from {}", inspector.keys().len(), self.input_file);
        self.logger.log(&format!("Listed properties of {}", self.input_file))?;
        Ok(())
    }
}

impl<'a> Command for PropertiesCommand<'a> {
    fn execute(&self) -> GeoDeckResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_report(&mut handle)
    }
}
