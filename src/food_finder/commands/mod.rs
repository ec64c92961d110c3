//! # Command Layer
//!
//! Pure business logic for each interpreter action. Commands take the
//! [`Registry`](crate::registry::Registry) plus plain arguments and return a
//! [`CmdResult`]. They never print; the interpreter turns results into text.

use crate::model::Restaurant;

pub mod add;
pub mod find;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<Restaurant>,
    pub saved: Option<Restaurant>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, restaurants: Vec<Restaurant>) -> Self {
        self.listed = restaurants;
        self
    }

    pub fn with_saved(mut self, restaurant: Restaurant) -> Self {
        self.saved = Some(restaurant);
        self
    }
}
