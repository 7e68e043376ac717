//! Configuration command handler.
//!
//! Prints the resolved configuration as pretty JSON, each value paired with
//! where it came from:
//!
//! ```json
//! {
//!   "sets": {
//!     "value": 6,
//!     "source": "file"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "sets": {
            "value": config.sets,
            "source": sources.sets,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "hands": {
            "value": config.hands,
            "source": sources.hands,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
