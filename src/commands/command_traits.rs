//! The two seams between the binaries and the library: a runnable
//! command, and the factory that picks one from parsed arguments.

use crate::errors::GeoDeckResult;
use crate::utils::logger::Logger;

/// One run of a geodeck program
///
/// Report text goes to stdout; diagnostics go through `log` to stderr.
/// Any error is fatal and the binary exits with status 1.
pub trait Command {
    fn execute(&self) -> GeoDeckResult<()>;
}

/// Builds the command for a set of parsed arguments
///
/// Option values are checked here, before any input is read, so a bad
/// `--pitch` or `--coverage` fails without touching the filesystem.
/// The returned command borrows `logger` for its completion record.
pub trait CommandFactory<'a> {
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> GeoDeckResult<Box<dyn Command + 'a>>;
}
