//! # State Module
//!
//! Application state for the console screen.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┐        ┌──────────────────┐              │
//! │          │    ListState     │        │   ConfigState    │              │
//! │          │                  │        │                  │              │
//! │          │  Arc<Mutex<      │        │  list policy     │              │
//! │          │    ListStore     │        │  layout          │              │
//! │          │  >>              │        │  output format   │              │
//! │          └──────────────────┘        └──────────────────┘              │
//! │                                                                         │
//! │  • ListState: every write takes the lock for one action                │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod list;

pub use config::{ConfigState, EditControls, Layout, OutputFormat};
pub use list::ListState;
