use crate::error::{RequestError, ValidationError};
use crate::fields::{self, FieldMap, WireContract};
use crate::methods::*;
use crate::objects::{InputFile, User};
use crate::response::{self, MessageOrBool};
use crate::validation::Validate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Debug;

/// # Bot API method description
/// Strongly typed description of one remote operation.
///
/// Example
/// ```
/// use serde::Serialize;
/// use tgmeta::fields::{Field, FieldMap};
/// use tgmeta::validation::{required_chat_id, Validate};
/// use tgmeta::{BotApiMethod, ValidationError};
///
/// #[derive(Serialize, Debug)]
/// struct LeaveChat {
///     chat_id: String,
/// }
///
/// impl FieldMap for LeaveChat {
///     const FIELDS: &'static [Field] = &[Field::required("chat_id", "chat_id")];
/// }
///
/// impl Validate for LeaveChat {
///     fn validate(&self) -> Result<(), ValidationError> {
///         required_chat_id(&self.chat_id, self)
///     }
/// }
///
/// impl BotApiMethod for LeaveChat {
///     type Response = bool;
///
///     fn method_name() -> &'static str {
///         "leaveChat"
///     }
/// }
///
/// let leave = LeaveChat { chat_id: "@channel".to_string() };
/// assert!(leave.validate().is_ok());
/// assert!(leave.deserialize_response(r#"{"ok":true,"result":true}"#).unwrap());
/// ```
pub trait BotApiMethod: Serialize + Validate + FieldMap + Debug + Sized {
    type Response: DeserializeOwned;

    /// Method name, the last segment of the request path
    fn method_name() -> &'static str;

    fn path(&self) -> &'static str {
        Self::method_name()
    }

    /// Top-level fields sent on the wire, absent optional fields omitted.
    fn wire_fields(&self) -> Result<Map<String, Value>, RequestError> {
        fields::to_wire_fields(self).map_err(RequestError::Serialize)
    }

    /// Files carried by this call. New uploads among them require a multipart request.
    fn attachments(&self) -> Vec<&InputFile> {
        Vec::new()
    }

    fn deserialize_response(&self, raw: &str) -> Result<Self::Response, RequestError> {
        response::parse_response(raw)
    }

    fn contract() -> WireContract {
        WireContract::of::<Self>(Self::method_name())
    }
}

/// Interpreted result of any method in [`AnyMethod`].
#[derive(Clone, Debug, PartialEq)]
pub enum ResultValue {
    Bool(bool),
    User(User),
    MessageOrBool(MessageOrBool),
}

impl From<bool> for ResultValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<User> for ResultValue {
    fn from(user: User) -> Self {
        Self::User(user)
    }
}

impl From<MessageOrBool> for ResultValue {
    fn from(value: MessageOrBool) -> Self {
        Self::MessageOrBool(value)
    }
}

macro_rules! any_method {
    ($($method:ident),+ $(,)?) => {
        /// Closed set of every method this crate describes.
        #[derive(Clone, Debug, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum AnyMethod {
            $($method($method),)+
        }

        impl AnyMethod {
            pub fn path(&self) -> &'static str {
                match self {
                    $(Self::$method(method) => method.path(),)+
                }
            }

            pub fn wire_fields(&self) -> Result<Map<String, Value>, RequestError> {
                match self {
                    $(Self::$method(method) => method.wire_fields(),)+
                }
            }

            pub fn attachments(&self) -> Vec<&InputFile> {
                match self {
                    $(Self::$method(method) => method.attachments(),)+
                }
            }

            pub fn deserialize_response(&self, raw: &str) -> Result<ResultValue, RequestError> {
                match self {
                    $(Self::$method(method) => method.deserialize_response(raw).map(ResultValue::from),)+
                }
            }
        }

        impl Validate for AnyMethod {
            fn validate(&self) -> Result<(), ValidationError> {
                match self {
                    $(Self::$method(method) => method.validate(),)+
                }
            }
        }

        $(
            impl From<$method> for AnyMethod {
                fn from(method: $method) -> Self {
                    Self::$method(method)
                }
            }
        )+
    };
}

any_method!(
    GetMe,
    SetChatTitle,
    SetChatDescription,
    EditMessageText,
    EditMessageCaption,
    EditMessageReplyMarkup,
    CreateNewStickerSet,
    AddStickerToSet,
    SetStickerEmojiList,
    SetStickerKeywords,
    SetStickerMaskPosition,
);
