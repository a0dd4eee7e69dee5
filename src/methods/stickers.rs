use crate::error::{Rule, ValidationError};
use crate::fields::{Field, FieldMap};
use crate::method::BotApiMethod;
use crate::objects::{InputFile, InputSticker, MaskPosition};
use crate::validation::{
    count_between, max_chars, non_empty, one_of, present, required_user_id, Validate,
};
use serde::{Deserialize, Serialize};

/// Allowed values of [`CreateNewStickerSet::sticker_type`].
pub const STICKER_SET_TYPES: [&str; 3] = ["regular", "mask", "custom_emoji"];

fn sticker_files<'a>(stickers: impl IntoIterator<Item = &'a InputSticker>) -> Vec<&'a InputFile> {
    stickers
        .into_iter()
        .filter_map(|sticker| sticker.sticker.as_ref())
        .collect()
}

/// Create a new sticker set owned by a user. The bot will be able to edit the set.
/// Returns `true` on success.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNewStickerSet {
    /// User identifier of the created sticker set owner.
    pub user_id: i64,
    /// Short name of the set, 1-64 characters, must end in `_by_<bot_username>`.
    pub name: String,
    /// Sticker set title, 1-64 characters.
    pub title: String,
    /// 1-50 initial stickers to be added to the sticker set.
    pub stickers: Vec<InputSticker>,
    /// “regular”, “mask”, or “custom_emoji”. By default a regular sticker set is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_type: Option<String>,
    /// Custom emoji sticker sets only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_repainting: Option<bool>,
}

impl CreateNewStickerSet {
    pub fn new(user_id: i64, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_sticker(mut self, sticker: InputSticker) -> Self {
        self.stickers.push(sticker);
        self
    }

    pub fn with_sticker_type(mut self, sticker_type: impl Into<String>) -> Self {
        self.sticker_type = Some(sticker_type.into());
        self
    }

    pub fn with_needs_repainting(mut self, needs_repainting: bool) -> Self {
        self.needs_repainting = Some(needs_repainting);
        self
    }
}

impl FieldMap for CreateNewStickerSet {
    const FIELDS: &'static [Field] = &[
        Field::required("user_id", "user_id"),
        Field::required("name", "name"),
        Field::required("title", "title"),
        Field::required("stickers", "stickers"),
        Field::optional("sticker_type", "sticker_type"),
        Field::optional("needs_repainting", "needs_repainting"),
    ];
}

impl Validate for CreateNewStickerSet {
    fn validate(&self) -> Result<(), ValidationError> {
        required_user_id(self.user_id, self)?;
        non_empty(&self.name, "Name can't be empty", self)?;
        non_empty(&self.title, "Title can't be empty", self)?;
        // needs_repainting only applies to custom emoji sets
        if self.needs_repainting.is_some()
            && self.sticker_type.as_deref() != Some("custom_emoji")
        {
            return Err(ValidationError::new(
                Rule::Exclusive,
                "NeedsRepainting can only be set for custom_emoji sticker sets",
                self,
            ));
        }
        max_chars(&self.name, 64, "Name can't be longer than 64 characters", self)?;
        max_chars(&self.title, 64, "Title can't be longer than 64 characters", self)?;
        count_between(
            self.stickers.len(),
            1,
            50,
            "Stickers list must have between 1 and 50 items",
            self,
        )?;
        if let Some(sticker_type) = &self.sticker_type {
            one_of(
                sticker_type,
                &STICKER_SET_TYPES,
                "Sticker type must be 'regular', 'mask' or 'custom_emoji'",
                self,
            )?;
        }
        self.stickers.validate()
    }
}

impl BotApiMethod for CreateNewStickerSet {
    type Response = bool;

    fn method_name() -> &'static str {
        "createNewStickerSet"
    }

    fn attachments(&self) -> Vec<&InputFile> {
        sticker_files(&self.stickers)
    }
}

/// Add a new sticker to a set created by the bot. Returns `true` on success.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddStickerToSet {
    /// User identifier of the sticker set owner.
    pub user_id: i64,
    /// Sticker set name.
    pub name: String,
    /// Information about the added sticker. If exactly the same sticker had already been added
    /// to the set, then the set isn't changed.
    pub sticker: Option<InputSticker>,
}

impl AddStickerToSet {
    pub fn new(user_id: i64, name: impl Into<String>, sticker: InputSticker) -> Self {
        Self {
            user_id,
            name: name.into(),
            sticker: Some(sticker),
        }
    }
}

impl FieldMap for AddStickerToSet {
    const FIELDS: &'static [Field] = &[
        Field::required("user_id", "user_id"),
        Field::required("name", "name"),
        Field::required("sticker", "sticker"),
    ];
}

impl Validate for AddStickerToSet {
    fn validate(&self) -> Result<(), ValidationError> {
        required_user_id(self.user_id, self)?;
        non_empty(&self.name, "Name can't be empty", self)?;
        present(self.sticker.as_ref(), "Sticker can't be empty", self)?;
        self.sticker.validate()
    }
}

impl BotApiMethod for AddStickerToSet {
    type Response = bool;

    fn method_name() -> &'static str {
        "addStickerToSet"
    }

    fn attachments(&self) -> Vec<&InputFile> {
        sticker_files(&self.sticker)
    }
}

/// Change the list of emoji assigned to a regular or custom emoji sticker.
/// The sticker must belong to a sticker set created by the bot. Returns `true` on success.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetStickerEmojiList {
    /// File identifier of the sticker.
    pub sticker: String,
    /// 1-20 emoji associated with the sticker.
    pub emoji_list: Vec<String>,
}

impl SetStickerEmojiList {
    pub fn new(sticker: impl Into<String>, emoji_list: Vec<String>) -> Self {
        Self {
            sticker: sticker.into(),
            emoji_list,
        }
    }
}

impl FieldMap for SetStickerEmojiList {
    const FIELDS: &'static [Field] = &[
        Field::required("sticker", "sticker"),
        Field::required("emoji_list", "emoji_list"),
    ];
}

impl Validate for SetStickerEmojiList {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty(&self.sticker, "Sticker can't be empty", self)?;
        count_between(
            self.emoji_list.len(),
            1,
            20,
            "Emoji list must have between 1 and 20 items",
            self,
        )
    }
}

impl BotApiMethod for SetStickerEmojiList {
    type Response = bool;

    fn method_name() -> &'static str {
        "setStickerEmojiList"
    }
}

/// Change search keywords assigned to a regular or custom emoji sticker.
/// Returns `true` on success.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetStickerKeywords {
    /// File identifier of the sticker.
    pub sticker: String,
    /// 0-20 search keywords. Empty removes the keywords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl SetStickerKeywords {
    pub fn new(sticker: impl Into<String>) -> Self {
        Self {
            sticker: sticker.into(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }
}

impl FieldMap for SetStickerKeywords {
    const FIELDS: &'static [Field] = &[
        Field::required("sticker", "sticker"),
        Field::optional("keywords", "keywords"),
    ];
}

impl Validate for SetStickerKeywords {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty(&self.sticker, "Sticker can't be empty", self)?;
        count_between(
            self.keywords.len(),
            0,
            20,
            "Keywords list must have between 0 and 20 items",
            self,
        )
    }
}

impl BotApiMethod for SetStickerKeywords {
    type Response = bool;

    fn method_name() -> &'static str {
        "setStickerKeywords"
    }
}

/// Change the mask position of a mask sticker. Returns `true` on success.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SetStickerMaskPosition {
    /// File identifier of the sticker.
    pub sticker: String,
    /// Absent removes the mask position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
}

impl SetStickerMaskPosition {
    pub fn new(sticker: impl Into<String>) -> Self {
        Self {
            sticker: sticker.into(),
            mask_position: None,
        }
    }

    pub fn with_mask_position(mut self, mask_position: MaskPosition) -> Self {
        self.mask_position = Some(mask_position);
        self
    }
}

impl FieldMap for SetStickerMaskPosition {
    const FIELDS: &'static [Field] = &[
        Field::required("sticker", "sticker"),
        Field::optional("mask_position", "mask_position"),
    ];
}

impl Validate for SetStickerMaskPosition {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty(&self.sticker, "Sticker can't be empty", self)?;
        self.mask_position.validate()
    }
}

impl BotApiMethod for SetStickerMaskPosition {
    type Response = bool;

    fn method_name() -> &'static str {
        "setStickerMaskPosition"
    }
}
