//! # Rendering
//!
//! Draws command replies as text or JSON.
//!
//! ## Text Layouts
//! ```text
//! Layout::Dialog                          Layout::Inline
//! ──────────────                          ──────────────
//! Shopping List                           Shopping List
//! ────────────────                        ────────────────
//!   #1  Apples   Qty: 2   [✎] [🗑]        Item Name: [ ]  Quantity: [1]  [Add]
//!   #2  Name: [Bagels]  Qty: [4]  [Update]  #1  Apples   Qty: 2   [Edit] [Delete]
//! ────────────────                        ────────────────
//! (+) Add Item: type 'new'                2 items, total quantity 6
//! ```
//! When the dialog is open it is drawn as a box below the list.

use std::fmt::{self, Write as _};

use serde_json::json;
use shoplist_core::{ItemView, ListPolicy};

use crate::commands::list::ListResponse;
use crate::error::ApiError;
use crate::screen::input::HELP;
use crate::screen::Reply;
use crate::state::{ConfigState, EditControls, Layout, OutputFormat};

const TITLE: &str = "Shopping List";
const RULE: &str = "────────────────────────────────────────────────";

/// Renders a reply in the configured output format.
pub fn render_reply(config: &ConfigState, reply: &Reply) -> Result<String, ApiError> {
    match config.output {
        OutputFormat::Text => Ok(render_text(config, reply)),
        OutputFormat::Json => render_json(reply),
    }
}

/// Renders an error. Never fails.
pub fn render_error(config: &ConfigState, err: &ApiError) -> String {
    match config.output {
        OutputFormat::Text => format!("! {}", err.message),
        OutputFormat::Json => {
            serde_json::to_string(&json!({ "error": err })).unwrap_or_else(|_| format!("! {}", err.message))
        }
    }
}

fn render_json(reply: &Reply) -> Result<String, ApiError> {
    let value = match reply {
        Reply::List(list) => serde_json::to_value(list)?,
        Reply::Item(item) => serde_json::to_value(item)?,
        Reply::Config(config) => serde_json::to_value(config)?,
        Reply::Help => json!({ "help": HELP }),
        Reply::Quit => json!({ "quit": true }),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

fn render_text(config: &ConfigState, reply: &Reply) -> String {
    match reply {
        Reply::List(list) => render_list(config, list),
        Reply::Item(item) => render_item(item),
        Reply::Config(config) => render_config(config),
        Reply::Help => HELP.to_string(),
        Reply::Quit => String::new(),
    }
}

/// Renders the whole screen.
pub fn render_list(config: &ConfigState, list: &ListResponse) -> String {
    let mut out = String::new();
    // Writing to a String only fails if a Display impl does
    write_list(&mut out, config, list).unwrap_or_default();
    out.trim_end().to_string()
}

fn write_list(out: &mut String, config: &ConfigState, list: &ListResponse) -> fmt::Result {
    writeln!(out, "{}\n{}", TITLE, RULE)?;

    if config.layout == Layout::Inline {
        writeln!(
            out,
            "Item Name: [{}]  Quantity: [{}]  [Add]\n",
            list.draft.name, list.draft.quantity
        )?;
    }

    if list.items.is_empty() {
        writeln!(out, "  (no items)")?;
    }
    for item in &list.items {
        writeln!(out, "{}", render_row(config.edit_controls, list, item))?;
    }

    let count = list.items.len();
    writeln!(
        out,
        "{}\n{} {}, total quantity {}",
        RULE,
        count,
        if count == 1 { "item" } else { "items" },
        list.total_quantity
    )?;

    match config.layout {
        Layout::Dialog if list.draft.open => write!(
            out,
            "┌─ Add Shopping Item ─────────────\n\
             │ Item Name: {}\n\
             │ Quantity:  {}\n\
             └─ [Add] ok   [Cancel] cancel",
            list.draft.name, list.draft.quantity
        ),
        Layout::Dialog => write!(out, "(+) Add Item: type 'new'"),
        Layout::Inline => Ok(()),
    }
}

fn render_row(controls: EditControls, list: &ListResponse, item: &ItemView) -> String {
    if item.is_editing {
        // The edit row shows staged text, not the stored values
        let (name, quantity) = match &list.editing {
            Some(session) => (session.name.clone(), session.quantity.clone()),
            None => (item.name.clone(), item.quantity.to_string()),
        };
        return format!(
            "  #{:<3} Name: [{}]  Qty: [{}]  [Update]",
            item.id, name, quantity
        );
    }

    let (edit, delete) = match controls {
        EditControls::Icons => ("[✎]", "[🗑]"),
        EditControls::Buttons => ("[Edit]", "[Delete]"),
    };
    format!(
        "  #{:<3} {:<24} Qty: {:<5} {} {}",
        item.id, item.name, item.quantity, edit, delete
    )
}

fn render_item(item: &ItemView) -> String {
    let mut out = format!("#{} {} (Qty: {})", item.id, item.name, item.quantity);
    if item.is_editing {
        out.push_str(" [editing]");
    }
    out
}

fn render_config(config: &ConfigState) -> String {
    let ListPolicy {
        name_policy,
        fallback_quantity,
        id_strategy,
    } = config.policy();
    format!(
        "name policy:       {}\n\
         fallback quantity: {}\n\
         id strategy:       {}\n\
         layout:            {:?}\n\
         edit controls:     {:?}\n\
         output:            {:?}",
        name_policy, fallback_quantity, id_strategy, config.layout, config.edit_controls, config.output
    )
}
