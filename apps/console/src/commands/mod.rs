//! # Commands Module
//!
//! Every operation the screen can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── list.rs     ◄─── Add, edit, delete, add-form and edit-row text
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen                                                                 │
//! │  ──────                                                                 │
//! │  "add 2 Apples"  ──► ScreenCommand::Add { quantity: "2", name: ... }    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::list::add_item(&list, name, quantity)                        │
//! │         │  lock ListState, apply Action::Add, log Outcome               │
//! │         ▼                                                               │
//! │  ListResponse { items, draft, editing, totalQuantity }                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  render (text or JSON)                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs.

pub mod config;
pub mod list;
