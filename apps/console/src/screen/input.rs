//! # Input Parsing
//!
//! Turns one typed line into a [`ScreenCommand`].
//!
//! ```text
//! add 2 Apples         direct add (quantity first, name is the rest)
//! new                  open the add form
//! name <text>          type into the name field (add form or edit row)
//! qty <text>           type into the quantity field (add form or edit row)
//! ok                   confirm the add form
//! cancel               close the add form
//! edit 2               open the edit row of item 2
//! update               commit the edit row
//! update 2 4 Bagels    write quantity 4 and name "Bagels" to item 2
//! del 2                delete item 2
//! show 2 | list | config | help | quit
//! ```

use shoplist_core::ItemId;

use crate::error::ApiError;

/// One parsed screen command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCommand {
    Add { quantity: String, name: String },
    NewItem,
    SetName(String),
    SetQuantity(String),
    Confirm,
    Cancel,
    Edit(ItemId),
    Update,
    UpdateWith {
        id: ItemId,
        quantity: String,
        name: String,
    },
    Delete(ItemId),
    Show(ItemId),
    List,
    Config,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <qty> <name>          add an item
  new                       open the add form
  name <text>               set the name field
  qty <text>                set the quantity field
  ok | cancel               confirm or close the add form
  edit <id>                 edit an item
  update                    save the edit row
  update <id> <qty> <name>  overwrite an item
  del <id>                  delete an item
  show <id> | list | config | help | quit";

/// Parses a line. Blank lines yield `Ok(None)`.
///
/// ## Errors
/// `INVALID_COMMAND` for an unknown command word, or an item id that is
/// missing or not a number.
pub fn parse_line(line: &str) -> Result<Option<ScreenCommand>, ApiError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = split_word(line);
    let command = match word.to_ascii_lowercase().as_str() {
        "add" => {
            let (quantity, name) = split_word(rest);
            ScreenCommand::Add {
                quantity: quantity.to_string(),
                name: name.to_string(),
            }
        }
        "new" => ScreenCommand::NewItem,
        "name" => ScreenCommand::SetName(rest.to_string()),
        "qty" | "quantity" => ScreenCommand::SetQuantity(rest.to_string()),
        "ok" | "confirm" => ScreenCommand::Confirm,
        "cancel" => ScreenCommand::Cancel,
        "edit" => ScreenCommand::Edit(parse_id(rest, "edit")?),
        "update" if rest.is_empty() => ScreenCommand::Update,
        "update" => {
            let (id, tail) = split_word(rest);
            let (quantity, name) = split_word(tail);
            ScreenCommand::UpdateWith {
                id: parse_id(id, "update")?,
                quantity: quantity.to_string(),
                name: name.to_string(),
            }
        }
        "del" | "delete" | "rm" => ScreenCommand::Delete(parse_id(rest, "del")?),
        "show" => ScreenCommand::Show(parse_id(rest, "show")?),
        "list" | "ls" => ScreenCommand::List,
        "config" => ScreenCommand::Config,
        "help" | "?" => ScreenCommand::Help,
        "quit" | "exit" | "q" => ScreenCommand::Quit,
        _ => {
            return Err(ApiError::invalid_command(format!(
                "Unknown command: {} (type 'help')",
                word
            )))
        }
    };

    Ok(Some(command))
}

/// Splits off the first whitespace-delimited word; the rest is trimmed.
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn parse_id(text: &str, command: &str) -> Result<ItemId, ApiError> {
    if text.is_empty() {
        return Err(ApiError::invalid_command(format!(
            "{} needs an item number",
            command
        )));
    }
    text.parse::<ItemId>()
        .map_err(|err| ApiError::invalid_command(format!("{}: {}", command, err)))
}
