//! # Shoplist Console Library
//!
//! Core library for the shopping list console screen.
//! This is the main entry point that configures and runs the screen loop.
//!
//! ## Module Organization
//! ```text
//! shoplist_console/
//! ├── lib.rs          ◄─── You are here (setup & run loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── list.rs     ◄─── Shared list state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── list.rs     ◄─── List manipulation commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── screen/
//! │   ├── mod.rs      ◄─── Screen dispatch
//! │   ├── input.rs    ◄─── Line parsing
//! │   └── render.rs   ◄─── Text / JSON rendering
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod screen;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use screen::render::{render_error, render_list, render_reply};
use screen::{Reply, Screen};
use state::{ConfigState, Layout, OutputFormat};

/// Runs the console screen on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn,shoplist=info; override with RUST_LOG               │
/// │                                                                         │
/// │  2. Load Configuration                                                  │
/// │     • SHOPLIST_* environment variables over defaults                    │
/// │                                                                         │
/// │  3. Initialize State                                                    │
/// │     • Empty list under the configured policy                            │
/// │                                                                         │
/// │  4. Screen Loop                                                         │
/// │     • One command per line until EOF or `quit`                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(
        name_policy = %config.name_policy,
        id_strategy = %config.id_strategy,
        layout = ?config.layout,
        "Starting shoplist console"
    );

    let screen = Screen::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&screen, stdin.lock(), stdout.lock())?;

    info!("Shoplist console closed");
    Ok(())
}

/// Drives `screen` from `input` until EOF or `quit`, rendering to `output`.
pub fn run_session<R, W>(screen: &Screen, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let config = screen.config();

    if config.output == OutputFormat::Text {
        let initial = commands::list::get_list(screen.list());
        writeln!(output, "{}", render_list(config, &initial))?;
        if config.layout == Layout::Dialog {
            writeln!(output, "Type 'help' for commands.")?;
        }
        output.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        let Some(result) = screen.handle_line(&line) else {
            continue;
        };

        let rendered = match result.and_then(|reply| match reply {
            Reply::Quit => Ok(None),
            reply => render_reply(config, &reply).map(Some),
        }) {
            Ok(Some(text)) => text,
            Ok(None) => break,
            Err(err) => {
                debug!(%err, "Command failed");
                render_error(config, &err)
            }
        };

        writeln!(output, "{}", rendered)?;
        output.flush()?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command and its outcome
/// - `RUST_LOG=shoplist_console=trace` - Trace this crate only
/// - Default: warnings, plus info from the shoplist crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shoplist_console=info,shoplist_core=info"));

    // Logs go to stderr so they never interleave with the rendered screen
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
