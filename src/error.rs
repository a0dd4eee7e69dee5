use crate::response::ResponseParameters;
use std::fmt::Debug;
use thiserror::Error;

/// Constraint class a [`ValidationError`] was raised by.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Rule {
    /// A required field is missing or empty.
    Required,
    /// One of two alternative field groups must be used, never both and never neither.
    Alternative,
    /// Two optional fields were supplied together.
    Exclusive,
    /// A string or a list is outside of its length bounds.
    Length,
    /// A value is not one of the allowed literals.
    Enumeration,
    /// A number is outside of its allowed range.
    Range,
}

/// Raised locally, before any request is sent, when a method or an object breaks
/// one of the Bot API parameter constraints.
///
/// Carries the violated [`Rule`], a human-readable message, the name of the offending
/// type and a `Debug` snapshot of the offending instance.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    rule: Rule,
    message: String,
    entity: &'static str,
    snapshot: String,
}

impl ValidationError {
    pub fn new<T>(rule: Rule, message: impl Into<String>, object: &T) -> Self
    where
        T: Debug + ?Sized,
    {
        let entity = std::any::type_name::<T>();
        Self {
            rule,
            message: message.into(),
            entity: entity.rsplit("::").next().unwrap_or(entity),
            snapshot: format!("{object:?}"),
        }
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Short type name of the instance that failed validation, e.g. `SetChatTitle`.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// `Debug` rendering of the instance at the moment it failed validation.
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }
}

/// Failures around a request: errors returned by the Bot API itself, bodies that can't be
/// interpreted as the documented result and transport problems.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The Bot API answered with `"ok": false`.
    /// [More info about codes](https://core.telegram.org/api/errors).
    #[error("telegram api error occurred. Code: {error_code}, description: {description}")]
    Api {
        error_code: i32,
        description: String,
        parameters: Option<ResponseParameters>,
    },
    #[error("unable to deserialize response: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("response is marked ok but carries no result")]
    MissingResult,
    #[error("unable to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RequestError {
    pub fn transport<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Transport(error.into())
    }

    /// Seconds to wait before repeating the request, when the API reported flood control.
    pub fn retry_after(&self) -> Option<i32> {
        match self {
            Self::Api {
                parameters: Some(parameters),
                ..
            } => parameters.retry_after,
            _ => None,
        }
    }

    /// New identifier of a group that was migrated to a supergroup.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        match self {
            Self::Api {
                parameters: Some(parameters),
                ..
            } => parameters.migrate_to_chat_id,
            _ => None,
        }
    }
}

/// Bot API errors.
/// `Error::Validation` is raised before anything is sent, `Error::Request` covers the request itself.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Shorthand for ``Result<T, Error>``
pub type BotApiResult<T> = Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Probe {
        title: &'static str,
    }

    #[test]
    fn validation_error_keeps_short_entity_name() {
        let probe = Probe { title: "" };
        let error = ValidationError::new(Rule::Required, "Title can't be empty", &probe);

        assert_eq!(error.entity(), "Probe");
        assert_eq!(error.rule(), Rule::Required);
        assert_eq!(error.to_string(), "Title can't be empty");
        assert!(error.snapshot().contains("title: \"\""));
    }

    #[test]
    fn api_error_exposes_parameters() {
        let error = RequestError::Api {
            error_code: 429,
            description: "Too Many Requests: retry after 5".to_string(),
            parameters: Some(ResponseParameters {
                migrate_to_chat_id: None,
                retry_after: Some(5),
            }),
        };

        assert_eq!(error.retry_after(), Some(5));
        assert_eq!(error.migrate_to_chat_id(), None);
        assert_eq!(
            error.to_string(),
            "telegram api error occurred. Code: 429, description: Too Many Requests: retry after 5"
        );
    }

    #[test]
    fn umbrella_error_is_transparent() {
        let probe = Probe { title: "x" };
        let error: Error = ValidationError::new(Rule::Length, "too long", &probe).into();

        assert_eq!(error.to_string(), "too long");
        assert!(matches!(error, Error::Validation(_)));
    }
}
