//! # Screen
//!
//! The console rendition of the shopping list screen: one [`Screen`] owns
//! the state, turns parsed commands into command calls, and hands replies
//! to [`render`].
//!
//! Field commands (`name`, `qty`) go to whichever form has focus: the open
//! edit row if there is one, otherwise the add form.

pub mod input;
pub mod render;

use shoplist_core::ItemView;

use crate::commands::{self, list::ListResponse};
use crate::error::ApiError;
use crate::state::{ConfigState, Layout, ListState};

pub use input::{parse_line, ScreenCommand};

/// What a command produced, before rendering.
#[derive(Debug, Clone)]
pub enum Reply {
    List(ListResponse),
    Item(ItemView),
    Config(ConfigState),
    Help,
    Quit,
}

/// Screen state: configuration plus the shared list.
#[derive(Debug, Clone)]
pub struct Screen {
    config: ConfigState,
    list: ListState,
}

impl Screen {
    /// Creates a screen with an empty list under the configured policy.
    pub fn new(config: ConfigState) -> Self {
        let list = ListState::new(config.policy());
        Screen { config, list }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    /// Runs one command.
    pub fn dispatch(&self, command: ScreenCommand) -> Result<Reply, ApiError> {
        use crate::commands::list as cmd;

        let list = &self.list;
        let response = match command {
            ScreenCommand::Add { quantity, name } => cmd::add_item(list, name, quantity),
            ScreenCommand::NewItem => cmd::open_add_form(list),
            ScreenCommand::SetName(text) => {
                if self.has_edit_row() {
                    cmd::set_edit_name(list, text)
                } else {
                    self.focus_add_form();
                    cmd::set_draft_name(list, text)
                }
            }
            ScreenCommand::SetQuantity(text) => {
                if self.has_edit_row() {
                    cmd::set_edit_quantity(list, text)
                } else {
                    self.focus_add_form();
                    cmd::set_draft_quantity(list, text)
                }
            }
            ScreenCommand::Confirm => cmd::confirm_add(list),
            ScreenCommand::Cancel => cmd::dismiss_add_form(list),
            ScreenCommand::Edit(id) => cmd::begin_edit(list, id),
            ScreenCommand::Update => cmd::commit_edit_session(list),
            ScreenCommand::UpdateWith { id, quantity, name } => {
                cmd::commit_edit(list, id, name, quantity)
            }
            ScreenCommand::Delete(id) => cmd::delete_item(list, id),
            ScreenCommand::Show(id) => return cmd::get_item(list, id).map(Reply::Item),
            ScreenCommand::List => cmd::get_list(list),
            ScreenCommand::Config => {
                return Ok(Reply::Config(commands::config::get_config(&self.config)))
            }
            ScreenCommand::Help => return Ok(Reply::Help),
            ScreenCommand::Quit => return Ok(Reply::Quit),
        };

        Ok(Reply::List(response))
    }

    /// Parses and runs one input line. Blank lines yield `None`.
    pub fn handle_line(&self, line: &str) -> Option<Result<Reply, ApiError>> {
        match parse_line(line) {
            Ok(Some(command)) => Some(self.dispatch(command)),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }

    fn has_edit_row(&self) -> bool {
        self.list.with_list(|l| l.editing().is_some())
    }

    /// Typing into a closed dialog opens it first.
    fn focus_add_form(&self) {
        if self.config.layout == Layout::Dialog && !self.list.with_list(|l| l.draft().open) {
            commands::list::open_add_form(&self.list);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shoplist_core::ItemId;

    fn run(screen: &Screen, line: &str) -> ListResponse {
        match screen.handle_line(line) {
            Some(Ok(Reply::List(list))) => list,
            other => panic!("expected a list reply for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_dialog_flow() {
        let screen = Screen::new(ConfigState::default());

        assert!(run(&screen, "new").draft.open);
        run(&screen, "name Milk");
        run(&screen, "qty 2");
        let list = run(&screen, "ok");

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].name, "Milk");
        assert_eq!(list.items[0].quantity, 2);
        assert!(!list.draft.open);
    }

    #[test]
    fn test_typing_opens_closed_dialog() {
        let screen = Screen::new(ConfigState::default());

        let list = run(&screen, "name Milk");

        assert!(list.draft.open);
        assert_eq!(list.draft.name, "Milk");
    }

    #[test]
    fn test_inline_typing_leaves_form_flag_alone() {
        let screen = Screen::new(ConfigState {
            layout: Layout::Inline,
            ..ConfigState::default()
        });

        let list = run(&screen, "name Milk");
        assert!(!list.draft.open);

        let list = run(&screen, "ok");
        assert_eq!(list.items[0].name, "Milk");
    }

    #[test]
    fn test_field_commands_follow_edit_row() {
        let screen = Screen::new(ConfigState::default());
        run(&screen, "add 2 Apples");
        run(&screen, "edit 1");

        run(&screen, "name Pears");
        run(&screen, "qty 7");
        let list = run(&screen, "update");

        assert_eq!(list.items[0].name, "Pears");
        assert_eq!(list.items[0].quantity, 7);
        assert_eq!(list.draft.name, "");
        assert!(!list.draft.open);
    }

    #[test]
    fn test_full_scenario() {
        let screen = Screen::new(ConfigState::default());
        run(&screen, "add 2 Apples");
        run(&screen, "add 1 Bread");
        run(&screen, "edit 2");
        run(&screen, "update 2 4 Bagels");
        let list = run(&screen, "del 1");

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].id, ItemId::new(2));
        assert_eq!(list.items[0].name, "Bagels");
        assert_eq!(list.items[0].quantity, 4);
        assert!(!list.items[0].is_editing);
    }

    #[test]
    fn test_show_and_missing_item() {
        let screen = Screen::new(ConfigState::default());
        run(&screen, "add 2 Apples");

        match screen.handle_line("show 1") {
            Some(Ok(Reply::Item(item))) => assert_eq!(item.name, "Apples"),
            other => panic!("unexpected reply: {:?}", other),
        }
        match screen.handle_line("show 5") {
            Some(Err(err)) => assert_eq!(err.code, ErrorCode::NotFound),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_non_list_replies() {
        let screen = Screen::new(ConfigState::default());
        assert!(screen.handle_line("").is_none());
        assert!(matches!(screen.handle_line("help"), Some(Ok(Reply::Help))));
        assert!(matches!(screen.handle_line("quit"), Some(Ok(Reply::Quit))));
        assert!(matches!(screen.handle_line("config"), Some(Ok(Reply::Config(_)))));
        assert!(matches!(screen.handle_line("dance"), Some(Err(_))));
    }

    #[test]
    fn test_huge_quantities_keep_screen_usable() {
        let screen = Screen::new(ConfigState::default());
        run(&screen, "add 9223372036854775807 Rice");
        run(&screen, "add 2147483647 Salt");
        let list = run(&screen, "add 1 Oil");

        // Out of i32 range falls back to 1
        assert_eq!(list.items[0].quantity, 1);
        assert_eq!(list.items[1].quantity, i32::MAX);
        assert_eq!(list.total_quantity, i64::from(i32::MAX) + 2);
        assert_eq!(run(&screen, "list").items.len(), 3);
    }

    #[test]
    fn test_loose_policy_from_config() {
        let screen = Screen::new(ConfigState::from_vars([("SHOPLIST_NAME_POLICY", "loose")]));

        let list = run(&screen, "add 3");

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].name, "");
        assert_eq!(list.items[0].quantity, 3);
    }
}
