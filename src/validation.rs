//! Parameter checks shared by methods and objects.
//!
//! Every helper takes the value under test and the instance that owns it, so the raised
//! [`ValidationError`] names the owner. Types run their checks in a fixed order
//! (presence, exclusivity, content, cascade) and stop on the first failure.

use crate::error::{Rule, ValidationError};
use std::fmt::Debug;

/// Client-side validation of Bot API parameters.
pub trait Validate {
    /// Checks current field values. Returns the first violated constraint.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<(), ValidationError> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        self.as_slice().validate()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        T::validate(self)
    }
}

pub fn required_chat_id<T: Debug + ?Sized>(chat_id: &str, owner: &T) -> Result<(), ValidationError> {
    non_empty(chat_id, "ChatId parameter can't be empty", owner)
}

/// Zero means the user id was never set, negative ids don't exist.
pub fn required_user_id<T: Debug + ?Sized>(user_id: i64, owner: &T) -> Result<(), ValidationError> {
    if user_id == 0 {
        return Err(ValidationError::new(Rule::Required, "UserId can't be empty", owner));
    }
    positive(user_id, "UserId must be positive", owner)
}

pub fn non_empty<T: Debug + ?Sized>(
    value: &str,
    message: &str,
    owner: &T,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(Rule::Required, message, owner));
    }
    Ok(())
}

pub fn present<V, T: Debug + ?Sized>(
    value: Option<&V>,
    message: &str,
    owner: &T,
) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(Rule::Required, message, owner)),
    }
}

/// Upper bound on a string length, counted in characters.
pub fn max_chars<T: Debug + ?Sized>(
    value: &str,
    max: usize,
    message: &str,
    owner: &T,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new(Rule::Length, message, owner));
    }
    Ok(())
}

/// Inclusive bounds on the number of items in a list.
pub fn count_between<T: Debug + ?Sized>(
    len: usize,
    min: usize,
    max: usize,
    message: &str,
    owner: &T,
) -> Result<(), ValidationError> {
    if len < min || len > max {
        return Err(ValidationError::new(Rule::Length, message, owner));
    }
    Ok(())
}

pub fn one_of<T: Debug + ?Sized>(
    value: &str,
    allowed: &[&str],
    message: &str,
    owner: &T,
) -> Result<(), ValidationError> {
    if !allowed.contains(&value) {
        return Err(ValidationError::new(Rule::Enumeration, message, owner));
    }
    Ok(())
}

pub fn positive<T: Debug + ?Sized>(
    value: i64,
    message: &str,
    owner: &T,
) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::new(Rule::Range, message, owner));
    }
    Ok(())
}

/// Fails when both optional values are supplied.
pub fn exclusive<T: Debug + ?Sized>(
    first: bool,
    second: bool,
    message: &str,
    owner: &T,
) -> Result<(), ValidationError> {
    if first && second {
        return Err(ValidationError::new(Rule::Exclusive, message, owner));
    }
    Ok(())
}

/// Messages are addressed either by `(chat_id, message_id)` or by `inline_message_id`.
pub fn message_target<T: Debug + ?Sized>(
    chat_id: Option<&str>,
    message_id: Option<i32>,
    inline_message_id: Option<&str>,
    owner: &T,
) -> Result<(), ValidationError> {
    let fail = |message: &str| Err(ValidationError::new(Rule::Alternative, message, owner));

    match inline_message_id {
        None => {
            if chat_id.map_or(true, str::is_empty) {
                return fail("ChatId parameter can't be empty if inlineMessageId is not present");
            }
            if message_id.is_none() {
                return fail("MessageId parameter can't be empty if inlineMessageId is not present");
            }
        }
        Some(_) => {
            if chat_id.is_some() {
                return fail("ChatId parameter must be empty if inlineMessageId is provided");
            }
            if message_id.is_some() {
                return fail("MessageId parameter must be empty if inlineMessageId is provided");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Owner;

    #[derive(Debug)]
    struct AlwaysFails;

    impl Validate for AlwaysFails {
        fn validate(&self) -> Result<(), ValidationError> {
            Err(ValidationError::new(Rule::Required, "nested", self))
        }
    }

    #[test]
    fn target_accepts_either_addressing() {
        assert!(message_target(Some("123"), Some(5), None, &Owner).is_ok());
        assert!(message_target(None, None, Some("abc"), &Owner).is_ok());
    }

    #[test]
    fn target_rejects_both_and_neither() {
        let both = message_target(Some("123"), Some(5), Some("abc"), &Owner).unwrap_err();
        assert_eq!(both.rule(), Rule::Alternative);
        assert_eq!(
            both.message(),
            "ChatId parameter must be empty if inlineMessageId is provided"
        );

        let neither = message_target(None, None, None, &Owner).unwrap_err();
        assert_eq!(
            neither.message(),
            "ChatId parameter can't be empty if inlineMessageId is not present"
        );

        let no_message = message_target(Some("123"), None, None, &Owner).unwrap_err();
        assert_eq!(
            no_message.message(),
            "MessageId parameter can't be empty if inlineMessageId is not present"
        );

        let stray_message = message_target(None, Some(1), Some("abc"), &Owner).unwrap_err();
        assert_eq!(
            stray_message.message(),
            "MessageId parameter must be empty if inlineMessageId is provided"
        );
    }

    #[test]
    fn empty_chat_id_counts_as_absent() {
        assert!(message_target(Some(""), Some(5), None, &Owner).is_err());
    }

    #[test]
    fn user_id_presence_and_range() {
        assert!(required_user_id(42, &Owner).is_ok());

        let unset = required_user_id(0, &Owner).unwrap_err();
        assert_eq!(unset.rule(), Rule::Required);
        assert_eq!(unset.message(), "UserId can't be empty");

        assert_eq!(required_user_id(-7, &Owner).unwrap_err().rule(), Rule::Range);
    }

    #[test]
    fn max_chars_counts_characters() {
        assert!(max_chars("ёжик", 4, "too long", &Owner).is_ok());
        assert!(max_chars("ёжики", 4, "too long", &Owner).is_err());
    }

    #[test]
    fn cascade_returns_nested_error_unchanged() {
        let nested = Some(AlwaysFails).validate().unwrap_err();
        assert_eq!(nested.entity(), "AlwaysFails");
        assert_eq!(nested.message(), "nested");

        assert!(None::<AlwaysFails>.validate().is_ok());
        assert!(Vec::<AlwaysFails>::new().validate().is_ok());
        assert!(vec![AlwaysFails].validate().is_err());
    }
}
