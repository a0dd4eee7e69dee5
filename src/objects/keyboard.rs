use crate::error::{Rule, ValidationError};
use crate::fields::{Field, FieldMap};
use crate::validation::{non_empty, Validate};
use serde::{Deserialize, Serialize};

/// An inline keyboard that appears right next to the message it belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(inline_keyboard: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self { inline_keyboard }
    }

    pub fn with_row(mut self, row: Vec<InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(row);
        self
    }
}

impl From<InlineKeyboardButton> for InlineKeyboardMarkup {
    fn from(button: InlineKeyboardButton) -> Self {
        Self {
            inline_keyboard: vec![vec![button]],
        }
    }
}

impl FieldMap for InlineKeyboardMarkup {
    const FIELDS: &'static [Field] = &[Field::required("inline_keyboard", "inline_keyboard")];
}

impl Validate for InlineKeyboardMarkup {
    fn validate(&self) -> Result<(), ValidationError> {
        self.inline_keyboard.iter().try_for_each(|row| row.validate())
    }
}

/// One button of an inline keyboard. Exactly one of the optional fields must be used.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Data sent in a callback query to the bot when the button is pressed, 1-64 bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay: Option<bool>,
}

impl InlineKeyboardButton {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: Some(data.into()),
            ..Default::default()
        }
    }

    fn actions(&self) -> usize {
        [
            self.url.is_some(),
            self.callback_data.is_some(),
            self.switch_inline_query.is_some(),
            self.switch_inline_query_current_chat.is_some(),
            self.pay.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

impl FieldMap for InlineKeyboardButton {
    const FIELDS: &'static [Field] = &[
        Field::required("text", "text"),
        Field::optional("url", "url"),
        Field::optional("callback_data", "callback_data"),
        Field::optional("switch_inline_query", "switch_inline_query"),
        Field::optional(
            "switch_inline_query_current_chat",
            "switch_inline_query_current_chat",
        ),
        Field::optional("pay", "pay"),
    ];
}

impl Validate for InlineKeyboardButton {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty(&self.text, "Text parameter can't be empty", self)?;
        if self.actions() != 1 {
            return Err(ValidationError::new(
                Rule::Alternative,
                "Exactly one button action must be set",
                self,
            ));
        }
        if let Some(data) = &self.callback_data {
            if data.is_empty() || data.len() > 64 {
                return Err(ValidationError::new(
                    Rule::Length,
                    "Callback data must be between 1 and 64 bytes",
                    self,
                ));
            }
        }
        Ok(())
    }
}
