use crate::error::RequestError;
use crate::objects::Message;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Extra information the Bot API attaches to some errors.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Flood control: seconds left to wait before the request can be repeated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i32>,
}

/// Result of the editing methods: the edited message for chat messages, `true` for inline ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageOrBool {
    Message(Box<Message>),
    Bool(bool),
}

impl MessageOrBool {
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::Message(message) => Some(message),
            Self::Bool(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    error_code: Option<i32>,
    description: Option<String>,
    parameters: Option<ResponseParameters>,
}

/// Interprets a raw Bot API response body as `T` or as the error it reports.
pub fn parse_response<T: DeserializeOwned>(raw: &str) -> Result<T, RequestError> {
    let response: ApiResponse<T> = serde_json::from_str(raw).map_err(RequestError::Deserialize)?;
    trace!(ok = response.ok, error_code = ?response.error_code, "bot api response decoded");

    if !response.ok {
        return Err(RequestError::Api {
            error_code: response.error_code.unwrap_or_default(),
            description: response.description.unwrap_or_default(),
            parameters: response.parameters,
        });
    }

    response.result.ok_or(RequestError::MissingResult)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::User;

    #[test]
    fn success_yields_result() {
        let ok: bool = parse_response(r#"{"ok":true,"result":true}"#).unwrap();
        assert!(ok);

        let user: User = parse_response(
            r#"{"ok":true,"result":{"id":42,"is_bot":true,"first_name":"Bot","username":"some_bot"}}"#,
        )
        .unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.username.as_deref(), Some("some_bot"));
    }

    #[test]
    fn api_error_carries_code_and_parameters() {
        let error = parse_response::<bool>(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: group chat was upgraded to a supergroup chat","parameters":{"migrate_to_chat_id":-1001234}}"#,
        )
        .unwrap_err();

        match &error {
            RequestError::Api {
                error_code,
                description,
                ..
            } => {
                assert_eq!(*error_code, 400);
                assert!(description.starts_with("Bad Request"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(error.migrate_to_chat_id(), Some(-1001234));
    }

    #[test]
    fn malformed_body_is_a_deserialize_error() {
        assert!(matches!(
            parse_response::<bool>("<html>502 Bad Gateway</html>"),
            Err(RequestError::Deserialize(_))
        ));
        assert!(matches!(
            parse_response::<bool>(r#"{"ok":true,"result":{"message_id":1}}"#),
            Err(RequestError::Deserialize(_))
        ));
    }

    #[test]
    fn ok_without_result_is_reported() {
        assert!(matches!(
            parse_response::<bool>(r#"{"ok":true}"#),
            Err(RequestError::MissingResult)
        ));
    }

    #[test]
    fn message_or_bool_accepts_both_shapes() {
        let inline: MessageOrBool = parse_response(r#"{"ok":true,"result":true}"#).unwrap();
        assert_eq!(inline, MessageOrBool::Bool(true));
        assert!(inline.message().is_none());

        let edited: MessageOrBool = parse_response(
            r#"{"ok":true,"result":{"message_id":7,"date":1700000000,"chat":{"id":-100,"type":"supergroup","title":"Group"},"caption":"new"}}"#,
        )
        .unwrap();
        let message = edited.message().expect("message result");
        assert_eq!(message.message_id, 7);
        assert_eq!(message.caption.as_deref(), Some("new"));
    }
}
