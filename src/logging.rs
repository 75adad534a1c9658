//! File logging setup.
//!
//! The terminal belongs to the user interface while the game runs, so log records go to a file
//! instead of standard error.

use std::{fs::File, path::Path};

use color_eyre::eyre::Result;
use env_logger::{Builder, Env, Target};

/// Installs a logger that writes to the given file.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. Passing [`None`] leaves logging
/// disabled, in which case every log macro in the crate is a no-op.
///
/// # Errors
///
/// This function may return errors if:
/// - The log file cannot be created
/// - A global logger was already installed
pub fn install(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    log::info!("logging to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_without_path_is_noop() {
        assert!(install(None).is_ok(), "no path should leave logging off");
    }
}
