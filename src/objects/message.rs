use crate::error::{Rule, ValidationError};
use crate::fields::{Field, FieldMap};
use crate::objects::InlineKeyboardMarkup;
use crate::validation::{non_empty, present, Validate};
use serde::{Deserialize, Serialize};

/// A Telegram user or bot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_join_groups: Option<bool>,
    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_read_all_group_messages: Option<bool>,
    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_inline_queries: Option<bool>,
}

/// A chat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// “private”, “group”, “supergroup” or “channel”.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// A special entity in a text message: hashtags, usernames, URLs, formatting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: String,
    /// Offset in UTF-16 code units to the start of the entity.
    pub offset: i32,
    /// Length of the entity in UTF-16 code units.
    pub length: i32,
    /// For “text_link” only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// For “text_mention” only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// For “pre” only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// For “custom_emoji” only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
}

impl MessageEntity {
    pub fn new(kind: impl Into<String>, offset: i32, length: i32) -> Self {
        Self {
            kind: kind.into(),
            offset,
            length,
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl FieldMap for MessageEntity {
    const FIELDS: &'static [Field] = &[
        Field::required("kind", "type"),
        Field::required("offset", "offset"),
        Field::required("length", "length"),
        Field::optional("url", "url"),
        Field::optional("user", "user"),
        Field::optional("language", "language"),
        Field::optional("custom_emoji_id", "custom_emoji_id"),
    ];
}

impl Validate for MessageEntity {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty(&self.kind, "Type can't be empty", self)?;
        // unknown kinds pass
        match self.kind.as_str() {
            "text_link" => present(self.url.as_ref(), "Url can't be empty for text_link", self)?,
            "text_mention" => {
                present(self.user.as_ref(), "User can't be empty for text_mention", self)?
            }
            "custom_emoji" => present(
                self.custom_emoji_id.as_ref(),
                "CustomEmojiId can't be empty for custom_emoji",
                self,
            )?,
            _ => {}
        }
        if self.offset < 0 || self.length <= 0 {
            return Err(ValidationError::new(
                Rule::Range,
                "Entity offset can't be negative and length must be positive",
                self,
            ));
        }
        Ok(())
    }
}

/// A message, as returned by the editing methods.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    /// Unix time the message was sent.
    pub date: i64,
    pub chat: Chat,
    /// Unix time the message was last edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_connection_id: Option<String>,
}
