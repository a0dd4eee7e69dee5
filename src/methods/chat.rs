use crate::error::ValidationError;
use crate::fields::{numeric_chat_id, Field, FieldMap};
use crate::method::BotApiMethod;
use crate::validation::{max_chars, non_empty, required_chat_id, Validate};
use serde::{Deserialize, Serialize};

/// Change the title of a chat. Titles can't be changed for private chats.
/// The bot must be an administrator in the chat with the appropriate rights.
/// Returns `true` on success.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetChatTitle {
    /// Unique identifier for the target chat or username of the target channel (`@channelusername`).
    pub chat_id: String,
    /// New chat title, 1-128 characters.
    pub title: String,
}

impl SetChatTitle {
    pub fn new(chat_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            title: title.into(),
        }
    }

    pub fn with_chat_id(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_id = chat_id.into();
        self
    }

    /// Same wire output as `with_chat_id(chat_id.to_string())`.
    pub fn with_numeric_chat_id(mut self, chat_id: i64) -> Self {
        self.set_numeric_chat_id(chat_id);
        self
    }

    pub fn set_numeric_chat_id(&mut self, chat_id: i64) {
        self.chat_id = numeric_chat_id(chat_id);
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl FieldMap for SetChatTitle {
    const FIELDS: &'static [Field] = &[
        Field::required("chat_id", "chat_id"),
        Field::required("title", "title"),
    ];
}

impl Validate for SetChatTitle {
    fn validate(&self) -> Result<(), ValidationError> {
        required_chat_id(&self.chat_id, self)?;
        non_empty(&self.title, "Title can't be empty", self)?;
        max_chars(&self.title, 128, "Title can't be longer than 128 characters", self)
    }
}

impl BotApiMethod for SetChatTitle {
    type Response = bool;

    fn method_name() -> &'static str {
        "setChatTitle"
    }
}

/// Change the description of a group, a supergroup or a channel.
/// Returns `true` on success.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetChatDescription {
    pub chat_id: String,
    /// New chat description, 0-255 characters. Absent removes the description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SetChatDescription {
    pub fn new(chat_id: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            description: None,
        }
    }

    pub fn with_chat_id(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_id = chat_id.into();
        self
    }

    pub fn with_numeric_chat_id(mut self, chat_id: i64) -> Self {
        self.set_numeric_chat_id(chat_id);
        self
    }

    pub fn set_numeric_chat_id(&mut self, chat_id: i64) {
        self.chat_id = numeric_chat_id(chat_id);
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl FieldMap for SetChatDescription {
    const FIELDS: &'static [Field] = &[
        Field::required("chat_id", "chat_id"),
        Field::optional("description", "description"),
    ];
}

impl Validate for SetChatDescription {
    fn validate(&self) -> Result<(), ValidationError> {
        required_chat_id(&self.chat_id, self)?;
        if let Some(description) = &self.description {
            max_chars(
                description,
                255,
                "Description can't be longer than 255 characters",
                self,
            )?;
        }
        Ok(())
    }
}

impl BotApiMethod for SetChatDescription {
    type Response = bool;

    fn method_name() -> &'static str {
        "setChatDescription"
    }
}
