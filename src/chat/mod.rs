//! Chat front-end for a document-augmented chat server.
//!
//! This module provides everything between the user and the
//! [`ChatBackend`](crate::ChatBackend):
//!
//! - A view-model holding the visual log, input field, and modal
//! - A controller that sends messages, uploads files, and refreshes the session
//! - Slash commands and a terminal renderer for the REPL binary
//!
//! # Architecture
//!
//! - [`view`]: page state, mutated only by the controller
//! - [`controller`]: user actions, one request per action, no retries
//! - [`config`]: CLI argument parsing and configuration
//! - [`commands`]: slash command parsing
//! - [`render`]: drawing the view to the terminal

mod commands;
mod config;
mod controller;
mod modal;
mod render;
mod view;

pub use commands::{ChatCommand, ModalInput, help_text, parse_command, parse_modal_input};
pub use config::{ChatArgs, ChatConfig};
pub use controller::{
    ChatController, RefreshOutcome, SEND_ERROR_TEXT, SendOutcome, UPLOAD_ERROR_TEXT,
    UPLOAD_SUCCESS_TEXT, UploadOutcome,
};
pub use modal::{ClickTarget, Modal};
pub use render::{LogCursor, PlainTextRenderer, Renderer};
pub use view::{ChatView, ROOT_PATH};
