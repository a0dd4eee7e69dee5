//! Methods that edit messages sent by the bot.
//!
//! All of them address a message either by `chat_id` + `message_id` or by
//! `inline_message_id`, and return the edited [`Message`](crate::objects::Message)
//! for chat messages or `true` for inline ones.

use crate::error::ValidationError;
use crate::fields::{numeric_chat_id, Field, FieldMap};
use crate::method::BotApiMethod;
use crate::objects::{InlineKeyboardMarkup, MessageEntity};
use crate::response::MessageOrBool;
use crate::validation::{exclusive, max_chars, message_target, non_empty, Validate};
use serde::{Deserialize, Serialize};

/// Which message an editing method applies to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTarget {
    /// Required if `inline_message_id` is not specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    /// Required if `inline_message_id` is not specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i32>,
    /// Required if `chat_id` and `message_id` are not specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    /// Business connection on behalf of which the message to be edited was sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_connection_id: Option<String>,
}

impl MessageTarget {
    pub fn chat(chat_id: impl Into<String>, message_id: i32) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            message_id: Some(message_id),
            ..Default::default()
        }
    }

    pub fn numeric_chat(chat_id: i64, message_id: i32) -> Self {
        Self::chat(numeric_chat_id(chat_id), message_id)
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self {
            inline_message_id: Some(inline_message_id.into()),
            ..Default::default()
        }
    }

    /// Checks the addressing alternative on behalf of `owner`.
    pub fn validate_for<T: std::fmt::Debug>(&self, owner: &T) -> Result<(), ValidationError> {
        message_target(
            self.chat_id.as_deref(),
            self.message_id,
            self.inline_message_id.as_deref(),
            owner,
        )
    }
}

const TARGET_FIELDS: [Field; 4] = [
    Field::optional("chat_id", "chat_id"),
    Field::optional("message_id", "message_id"),
    Field::optional("inline_message_id", "inline_message_id"),
    Field::optional("business_connection_id", "business_connection_id"),
];

macro_rules! message_target_setters {
    ($($method:ident),+) => {
        $(
            impl $method {
                pub fn with_target(mut self, target: MessageTarget) -> Self {
                    self.target = target;
                    self
                }

                pub fn with_chat_id(mut self, chat_id: impl Into<String>) -> Self {
                    self.target.chat_id = Some(chat_id.into());
                    self
                }

                /// Same wire output as `with_chat_id(chat_id.to_string())`.
                pub fn with_numeric_chat_id(mut self, chat_id: i64) -> Self {
                    self.set_numeric_chat_id(Some(chat_id));
                    self
                }

                pub fn set_numeric_chat_id(&mut self, chat_id: Option<i64>) {
                    self.target.chat_id = chat_id.map(numeric_chat_id);
                }

                pub fn with_message_id(mut self, message_id: i32) -> Self {
                    self.target.message_id = Some(message_id);
                    self
                }

                pub fn with_inline_message_id(mut self, inline_message_id: impl Into<String>) -> Self {
                    self.target.inline_message_id = Some(inline_message_id.into());
                    self
                }

                pub fn with_business_connection_id(
                    mut self,
                    business_connection_id: impl Into<String>,
                ) -> Self {
                    self.target.business_connection_id = Some(business_connection_id.into());
                    self
                }

                pub fn with_reply_markup(mut self, reply_markup: InlineKeyboardMarkup) -> Self {
                    self.reply_markup = Some(reply_markup);
                    self
                }
            }
        )+
    };
}

message_target_setters!(EditMessageText, EditMessageCaption, EditMessageReplyMarkup);

/// Edit text and game messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditMessageText {
    #[serde(flatten)]
    pub target: MessageTarget,
    /// New text of the message, 1-4096 characters after entities parsing.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    /// Can be specified instead of `parse_mode`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageText {
    pub fn new(target: MessageTarget, text: impl Into<String>) -> Self {
        Self {
            target,
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: impl Into<String>) -> Self {
        self.parse_mode = Some(parse_mode.into());
        self
    }

    pub fn with_entity(mut self, entity: MessageEntity) -> Self {
        self.entities.push(entity);
        self
    }
}

impl FieldMap for EditMessageText {
    const FIELDS: &'static [Field] = &[
        TARGET_FIELDS[0],
        TARGET_FIELDS[1],
        TARGET_FIELDS[2],
        TARGET_FIELDS[3],
        Field::required("text", "text"),
        Field::optional("parse_mode", "parse_mode"),
        Field::optional("entities", "entities"),
        Field::optional("disable_web_page_preview", "disable_web_page_preview"),
        Field::optional("reply_markup", "reply_markup"),
    ];
}

impl Validate for EditMessageText {
    fn validate(&self) -> Result<(), ValidationError> {
        self.target.validate_for(self)?;
        non_empty(&self.text, "Text parameter can't be empty", self)?;
        exclusive(
            self.parse_mode.is_some(),
            !self.entities.is_empty(),
            "Parse mode can't be enabled if Entities are provided",
            self,
        )?;
        max_chars(&self.text, 4096, "Text can't be longer than 4096 characters", self)?;
        self.entities.validate()?;
        self.reply_markup.validate()
    }
}

impl BotApiMethod for EditMessageText {
    type Response = MessageOrBool;

    fn method_name() -> &'static str {
        "editmessagetext"
    }
}

/// Edit captions of messages.
///
/// Business messages that were not sent by the bot and do not contain an inline keyboard
/// can only be edited within 48 hours from the time they were sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditMessageCaption {
    #[serde(flatten)]
    pub target: MessageTarget,
    /// New caption of the message, 0-1024 characters after entities parsing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    /// “Markdown”, “MarkdownV2” or “HTML”.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    /// Can be specified instead of `parse_mode`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    /// Pass `true` if the caption must be shown above the message media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<bool>,
}

impl EditMessageCaption {
    pub fn new(target: MessageTarget) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: impl Into<String>) -> Self {
        self.parse_mode = Some(parse_mode.into());
        self
    }

    pub fn with_caption_entity(mut self, entity: MessageEntity) -> Self {
        self.caption_entities.push(entity);
        self
    }

    pub fn with_show_caption_above_media(mut self, show: bool) -> Self {
        self.show_caption_above_media = Some(show);
        self
    }
}

impl FieldMap for EditMessageCaption {
    const FIELDS: &'static [Field] = &[
        TARGET_FIELDS[0],
        TARGET_FIELDS[1],
        TARGET_FIELDS[2],
        TARGET_FIELDS[3],
        Field::optional("caption", "caption"),
        Field::optional("reply_markup", "reply_markup"),
        Field::optional("parse_mode", "parse_mode"),
        Field::optional("caption_entities", "caption_entities"),
        Field::optional("show_caption_above_media", "show_caption_above_media"),
    ];
}

impl Validate for EditMessageCaption {
    fn validate(&self) -> Result<(), ValidationError> {
        self.target.validate_for(self)?;
        exclusive(
            self.parse_mode.is_some(),
            !self.caption_entities.is_empty(),
            "Parse mode can't be enabled if Entities are provided",
            self,
        )?;
        if let Some(caption) = &self.caption {
            max_chars(caption, 1024, "Caption can't be longer than 1024 characters", self)?;
        }
        self.caption_entities.validate()?;
        self.reply_markup.validate()
    }
}

impl BotApiMethod for EditMessageCaption {
    type Response = MessageOrBool;

    fn method_name() -> &'static str {
        "editmessagecaption"
    }
}

/// Edit only the reply markup of messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditMessageReplyMarkup {
    #[serde(flatten)]
    pub target: MessageTarget,
    /// Absent removes the inline keyboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageReplyMarkup {
    pub fn new(target: MessageTarget) -> Self {
        Self {
            target,
            reply_markup: None,
        }
    }
}

impl FieldMap for EditMessageReplyMarkup {
    const FIELDS: &'static [Field] = &[
        TARGET_FIELDS[0],
        TARGET_FIELDS[1],
        TARGET_FIELDS[2],
        TARGET_FIELDS[3],
        Field::optional("reply_markup", "reply_markup"),
    ];
}

impl Validate for EditMessageReplyMarkup {
    fn validate(&self) -> Result<(), ValidationError> {
        self.target.validate_for(self)?;
        self.reply_markup.validate()
    }
}

impl BotApiMethod for EditMessageReplyMarkup {
    type Response = MessageOrBool;

    fn method_name() -> &'static str {
        "editmessagereplymarkup"
    }
}
