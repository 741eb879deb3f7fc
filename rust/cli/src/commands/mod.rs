//! Command handler modules for the Casino War CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and input
//!   (`&mut dyn BufRead`) are passed as parameters
//! - Error propagation: all errors propagated via `CliError`

mod cfg;
mod deal;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
