//! # Typed Telegram Bot API methods and objects.
//! Every method knows its wire path, the wire keys of its fields and the result it returns,
//! and checks the documented parameter constraints before anything is sent.
//!
//! ## Usage
//! ```rust
//! use tgmeta::{BotApiMethod, EditMessageCaption, MessageOrBool, MessageTarget, Rule, Validate};
//!
//! let edit = EditMessageCaption::new(MessageTarget::numeric_chat(-100123, 42))
//!     .with_caption("*new* caption")
//!     .with_parse_mode("Markdown");
//! assert!(edit.validate().is_ok());
//! assert_eq!(edit.path(), "editmessagecaption");
//!
//! let fields = edit.wire_fields().unwrap();
//! assert_eq!(fields["chat_id"], "-100123");
//! assert!(!fields.contains_key("caption_entities"));
//!
//! let both = edit.clone().with_inline_message_id("AgAAAKi");
//! assert_eq!(both.validate().unwrap_err().rule(), Rule::Alternative);
//!
//! let result = edit.deserialize_response(r#"{"ok":true,"result":true}"#).unwrap();
//! assert_eq!(result, MessageOrBool::Bool(true));
//! ```
//!
//! ## Features
//! * client - enabled by default. Adds `BotApi`, an async https client built on hyper;
//! * uploader - enabled by default. Adds multipart uploads of new files to the client;
//! * compression_gzip - enabled by default. Adds gzip compression support;

pub mod error;
pub mod fields;
mod method;
pub mod methods;
pub mod objects;
pub mod response;
pub mod validation;

#[cfg(feature = "client")]
mod botapi;
#[cfg(feature = "client")]
mod builder;
#[cfg(feature = "client")]
mod inner;
#[cfg(feature = "uploader")]
mod upload;

#[cfg(feature = "client")]
pub use botapi::{BotApi, Compression};
#[cfg(feature = "client")]
pub use builder::{BotApiBuilder, API_DOMAIN_ENV, BOT_TOKEN_ENV};
pub use error::{BotApiResult, Error, RequestError, Rule, ValidationError};
pub use fields::{Field, FieldMap, Presence, WireContract};
pub use method::{AnyMethod, BotApiMethod, ResultValue};
pub use methods::*;
pub use objects::*;
pub use response::{MessageOrBool, ResponseParameters};
pub use validation::Validate;
