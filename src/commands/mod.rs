//! CLI command implementations
//!
//! This module contains implementations of the commands behind the
//! geodeck programs using the Command pattern.

pub mod command_traits;
pub mod render_command;
pub mod properties_command;

pub use command_traits::{Command, CommandFactory};
pub use render_command::RenderCommand;
pub use properties_command::PropertiesCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::errors::GeoDeckResult;

/// Factory for creating command instances based on CLI arguments
///
/// Arguments parsed by the property inspector's CLI yield a
/// `PropertiesCommand`; everything else is a map render.
pub struct GeoDeckCommandFactory;

impl GeoDeckCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeoDeckCommandFactory
    }
}

impl Default for GeoDeckCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeoDeckCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> GeoDeckResult<Box<dyn Command + 'a>> {
        if matches!(args.try_get_one::<bool>("properties"), Ok(Some(_))) {
            Ok(Box::new(PropertiesCommand::new(args, logger)?))
        } else {
            Ok(Box::new(RenderCommand::new(args, logger)?))
        }
    }
}
