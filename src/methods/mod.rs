//! One type per Bot API method.

mod bot;
mod chat;
mod editing;
mod stickers;

pub use bot::GetMe;
pub use chat::{SetChatDescription, SetChatTitle};
pub use editing::{EditMessageCaption, EditMessageReplyMarkup, EditMessageText, MessageTarget};
pub use stickers::{
    AddStickerToSet, CreateNewStickerSet, SetStickerEmojiList, SetStickerKeywords,
    SetStickerMaskPosition, STICKER_SET_TYPES,
};
