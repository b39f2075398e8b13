//! CLI infrastructure for training and inspecting the Q-learning agent
//!
//! The commands are thin drivers around [`crate::q_learning`]: they parse
//! flags, call the library and print what comes back.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug` for this
/// crate and `warn` everywhere else.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "warn,tictactoe_q=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
