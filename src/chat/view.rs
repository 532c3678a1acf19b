//! The view-model a front-end renders.
//!
//! [`ChatView`] owns everything a chat page shows: the visual log, the input
//! field, the modal, and the current location. The controller mutates it and
//! renderers read it; nothing else touches it.

use crate::chat::modal::{ClickTarget, Modal};
use crate::types::Message;

/// Path of the chat page.
pub const ROOT_PATH: &str = "/";

/// State of one chat page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    log: Vec<Message>,
    input: String,
    modal: Modal,
    location: String,
    page: u64,
}

impl ChatView {
    /// Creates an empty page at the root path.
    pub fn new() -> Self {
        Self {
            log: Vec::new(),
            input: String::new(),
            modal: Modal::new(),
            location: ROOT_PATH.to_string(),
            page: 0,
        }
    }

    /// The visual log, oldest first.
    pub fn log(&self) -> &[Message] {
        &self.log
    }

    /// Appends a message to the end of the visual log.
    pub fn append(&mut self, message: Message) {
        self.log.push(message);
    }

    /// Messages appended at or after `cursor`.
    pub fn since(&self, cursor: usize) -> &[Message] {
        &self.log[cursor.min(self.log.len())..]
    }

    /// Current contents of the input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the contents of the input field.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Empties the input field.
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// The modal dialog.
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Shows the modal with the given body.
    pub fn open_modal(&mut self, body: impl Into<String>) {
        self.modal.open(body);
    }

    /// Hides the modal.
    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Routes a click to the modal; returns true if it closed.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        self.modal.click(target)
    }

    /// The path the page was last loaded from.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Number of navigations since the view was created.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Performs a full navigation, which starts a fresh page session.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.log.clear();
        self.input.clear();
        self.modal.close();
        self.location = path.into();
        self.page += 1;
    }
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn new_view_is_empty() {
        let view = ChatView::new();
        assert!(view.log().is_empty());
        assert_eq!(view.input(), "");
        assert_eq!(view.location(), "/");
        assert_eq!(view.page(), 0);
        assert!(!view.modal().is_open());
    }

    #[test]
    fn append_preserves_order() {
        let mut view = ChatView::new();
        view.append(Message::user("hello"));
        view.append(Message::bot("hi there"));
        view.append(Message::user("again"));
        let roles: Vec<Role> = view.log().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Bot, Role::User]);
        assert_eq!(view.since(1), &[Message::bot("hi there"), Message::user("again")]);
        assert!(view.since(10).is_empty());
    }

    #[test]
    fn navigate_starts_new_page() {
        let mut view = ChatView::new();
        view.append(Message::user("hello"));
        view.set_input("draft");
        view.open_modal("help");
        view.navigate(ROOT_PATH);
        assert!(view.log().is_empty());
        assert_eq!(view.input(), "");
        assert!(!view.modal().is_open());
        assert_eq!(view.page(), 1);
    }
}
