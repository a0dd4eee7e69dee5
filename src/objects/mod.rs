//! Value objects: payloads embedded in methods and returned by the Bot API.

mod input_file;
mod keyboard;
mod message;
mod sticker;

pub use input_file::InputFile;
pub use keyboard::{InlineKeyboardButton, InlineKeyboardMarkup};
pub use message::{Chat, Message, MessageEntity, User};
pub use sticker::{InputSticker, MaskPosition, MASK_POINTS, STICKER_FORMATS};
