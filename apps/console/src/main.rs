//! # Shoplist Console Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration from `SHOPLIST_*` environment variables
//! 3. Create state objects (ListState, ConfigState)
//! 4. Read commands from stdin until EOF or `quit`

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match shoplist_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shoplist: {}", err);
            ExitCode::FAILURE
        }
    }
}
