use serde_json::{json, Value};
use tgmeta::{
    AddStickerToSet, AnyMethod, BotApiMethod, EditMessageCaption, InputFile, InputSticker,
    MessageEntity, MessageOrBool, RequestError, ResultValue, Rule, SetChatTitle,
    SetStickerEmojiList, Validate,
};

fn sticker(format: &str, emoji: usize) -> InputSticker {
    InputSticker::new(InputFile::existing("CAACAgIAAxk"), format)
        .with_emoji_list(vec!["🐈".to_string(); emoji])
}

#[test]
fn missing_required_string_names_the_field() {
    let error = SetChatTitle::default()
        .with_chat_id("@channel")
        .validate()
        .unwrap_err();

    assert_eq!(error.rule(), Rule::Required);
    assert!(error.message().contains("Title"));

    let error = SetChatTitle::default().with_title("t").validate().unwrap_err();
    assert!(error.message().contains("ChatId"));
}

#[test]
fn chat_addressing_is_an_alternative() {
    let chat = EditMessageCaption::default()
        .with_chat_id("123")
        .with_message_id(5);
    let inline = EditMessageCaption::default().with_inline_message_id("abc");
    let both = chat.clone().with_inline_message_id("abc");
    let neither = EditMessageCaption::default();

    assert!(chat.validate().is_ok());
    assert!(inline.validate().is_ok());
    assert_eq!(both.validate().unwrap_err().rule(), Rule::Alternative);
    assert_eq!(neither.validate().unwrap_err().rule(), Rule::Alternative);
    assert_ne!(
        both.validate().unwrap_err().message(),
        neither.validate().unwrap_err().message()
    );
}

#[test]
fn emoji_list_size_bounds() {
    for size in [1, 20] {
        assert!(sticker("static", size).validate().is_ok());
        assert!(SetStickerEmojiList::new("s", vec!["🐈".to_string(); size])
            .validate()
            .is_ok());
    }
    for size in [0, 21] {
        assert_eq!(sticker("static", size).validate().unwrap_err().rule(), Rule::Length);
        assert!(SetStickerEmojiList::new("s", vec!["🐈".to_string(); size])
            .validate()
            .is_err());
    }
}

#[test]
fn sticker_format_is_enumerated() {
    for format in ["static", "animated", "video"] {
        assert!(sticker(format, 1).validate().is_ok());
    }
    for format in ["Static", "png", "", "video "] {
        assert_eq!(
            sticker(format, 1).validate().unwrap_err().rule(),
            Rule::Enumeration
        );
    }
}

#[test]
fn parse_mode_and_entities_are_exclusive() {
    let base = EditMessageCaption::default()
        .with_chat_id("1")
        .with_message_id(2)
        .with_caption("bold");
    let entity = MessageEntity::new("bold", 0, 4);

    assert!(base.clone().with_parse_mode("Markdown").validate().is_ok());
    assert!(base.clone().with_caption_entity(entity.clone()).validate().is_ok());

    let error = base
        .with_parse_mode("Markdown")
        .with_caption_entity(entity)
        .validate()
        .unwrap_err();
    assert_eq!(error.rule(), Rule::Exclusive);
}

#[test]
fn numeric_chat_id_adaptor_is_equivalent() {
    let numeric = SetChatTitle::default()
        .with_numeric_chat_id(123456789)
        .with_title("t");
    let string = SetChatTitle::default()
        .with_chat_id("123456789")
        .with_title("t");

    let numeric_fields = numeric.wire_fields().unwrap();
    assert_eq!(numeric_fields, string.wire_fields().unwrap());
    assert_eq!(numeric_fields["chat_id"], json!("123456789"));
}

#[test]
fn cascade_keeps_the_nested_error() {
    let broken = InputSticker::new(InputFile::existing("CAACAgIAAxk"), "static");
    let nested = broken.validate().unwrap_err();

    let error = AddStickerToSet::new(7, "cats_by_bot", broken)
        .validate()
        .unwrap_err();

    assert_eq!(error, nested);
    assert_eq!(error.entity(), "InputSticker");
}

#[test]
fn wire_contract_uses_snake_case_keys() {
    let contract = EditMessageCaption::contract();
    let optional: Vec<&str> = contract.optional.iter().map(|f| f.wire_key).collect();

    assert_eq!(contract.path, "editmessagecaption");
    assert!(contract.required.is_empty());
    for key in [
        "caption_entities",
        "parse_mode",
        "show_caption_above_media",
        "business_connection_id",
    ] {
        assert!(optional.contains(&key), "{key} is not mapped");
    }

    let sticker_contract = SetChatTitle::contract();
    let required: Vec<&str> = sticker_contract.required.iter().map(|f| f.wire_key).collect();
    assert_eq!(required, vec!["chat_id", "title"]);
}

#[test]
fn absent_optional_fields_are_not_emitted() {
    let fields = EditMessageCaption::default()
        .with_inline_message_id("abc")
        .wire_fields()
        .unwrap();

    assert_eq!(Value::Object(fields), json!({ "inline_message_id": "abc" }));
}

#[test]
fn responses_map_to_results_or_errors() {
    let method: AnyMethod = EditMessageCaption::default()
        .with_inline_message_id("abc")
        .into();

    assert_eq!(
        method
            .deserialize_response(r#"{"ok":true,"result":true}"#)
            .unwrap(),
        ResultValue::MessageOrBool(MessageOrBool::Bool(true))
    );

    let error = method
        .deserialize_response(
            r#"{"ok":false,"error_code":429,"description":"Too Many Requests","parameters":{"retry_after":3}}"#,
        )
        .unwrap_err();
    assert_eq!(error.retry_after(), Some(3));
    assert!(matches!(error, RequestError::Api { error_code: 429, .. }));
}
