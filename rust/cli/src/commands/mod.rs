//! Command handlers for the shoe CLI.
//!
//! Each command lives in its own module and follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, so tests capture into `Vec<u8>`
//! - Errors propagated via `CliError`

pub mod cfg;
pub mod deal;
pub mod deck;
pub mod eval;
pub mod rng;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use deck::handle_deck_command;
pub use eval::handle_eval_command;
pub use rng::handle_rng_command;
