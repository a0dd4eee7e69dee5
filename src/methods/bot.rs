use crate::error::ValidationError;
use crate::fields::{Field, FieldMap};
use crate::method::BotApiMethod;
use crate::objects::User;
use crate::validation::Validate;
use serde::{Deserialize, Serialize};

/// Basic information about the bot. Useful to test the auth token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMe {}

impl FieldMap for GetMe {
    const FIELDS: &'static [Field] = &[];
}

impl Validate for GetMe {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl BotApiMethod for GetMe {
    type Response = User;

    fn method_name() -> &'static str {
        "getMe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sends_no_fields_and_returns_user() {
        let get_me = GetMe {};

        assert!(get_me.validate().is_ok());
        assert!(get_me.wire_fields().unwrap().is_empty());

        let me = get_me
            .deserialize_response(
                r#"{"ok":true,"result":{"id":1,"is_bot":true,"first_name":"Bot","can_join_groups":true}}"#,
            )
            .unwrap();
        assert!(me.is_bot);
        assert_eq!(me.can_join_groups, Some(true));
    }
}
