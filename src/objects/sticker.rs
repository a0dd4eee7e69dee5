use crate::error::{Rule, ValidationError};
use crate::fields::{Field, FieldMap};
use crate::objects::InputFile;
use crate::validation::{count_between, non_empty, one_of, present, Validate};
use serde::{Deserialize, Serialize};

/// Allowed values of [`InputSticker::format`].
pub const STICKER_FORMATS: [&str; 3] = ["static", "animated", "video"];

/// Allowed values of [`MaskPosition::point`].
pub const MASK_POINTS: [&str; 4] = ["forehead", "eyes", "mouth", "chin"];

/// Position on faces where a mask should be placed by default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaskPosition {
    /// The part of the face relative to which the mask should be placed.
    /// One of “forehead”, “eyes”, “mouth”, or “chin”.
    pub point: String,
    /// Shift by X-axis measured in widths of the mask scaled to the face size, from left to right.
    pub x_shift: f64,
    /// Shift by Y-axis measured in heights of the mask scaled to the face size, from top to bottom.
    pub y_shift: f64,
    /// Mask scaling coefficient. For example, 2.0 means double size.
    pub scale: f64,
}

impl MaskPosition {
    pub fn new(point: impl Into<String>, x_shift: f64, y_shift: f64, scale: f64) -> Self {
        Self {
            point: point.into(),
            x_shift,
            y_shift,
            scale,
        }
    }
}

impl FieldMap for MaskPosition {
    const FIELDS: &'static [Field] = &[
        Field::required("point", "point"),
        Field::required("x_shift", "x_shift"),
        Field::required("y_shift", "y_shift"),
        Field::required("scale", "scale"),
    ];
}

impl Validate for MaskPosition {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty(&self.point, "Point can't be empty", self)?;
        one_of(
            &self.point,
            &MASK_POINTS,
            "Point must be 'forehead', 'eyes', 'mouth' or 'chin'",
            self,
        )?;
        // non-finite floats serialize as null
        if !self.x_shift.is_finite() || !self.y_shift.is_finite() {
            return Err(ValidationError::new(
                Rule::Range,
                "Shift must be a finite number",
                self,
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ValidationError::new(
                Rule::Range,
                "Scale must be a positive finite number",
                self,
            ));
        }
        Ok(())
    }
}

/// A sticker to be added to a sticker set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSticker {
    /// The added sticker. Animated and video stickers can't be uploaded via HTTP URL.
    pub sticker: Option<InputFile>,
    /// List of 1-20 emoji associated with the sticker.
    pub emoji_list: Vec<String>,
    /// Format of the added sticker: “static” for a .WEBP or .PNG image,
    /// “animated” for a .TGS animation, “video” for a WEBM video.
    pub format: String,
    /// For “mask” stickers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    /// List of 0-20 search keywords. For “regular” and “custom_emoji” stickers only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl InputSticker {
    pub fn new(sticker: InputFile, format: impl Into<String>) -> Self {
        Self {
            sticker: Some(sticker),
            format: format.into(),
            ..Default::default()
        }
    }

    pub fn with_sticker(mut self, sticker: InputFile) -> Self {
        self.sticker = Some(sticker);
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji_list.push(emoji.into());
        self
    }

    pub fn with_emoji_list(mut self, emoji_list: Vec<String>) -> Self {
        self.emoji_list = emoji_list;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_mask_position(mut self, mask_position: MaskPosition) -> Self {
        self.mask_position = Some(mask_position);
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }
}

impl FieldMap for InputSticker {
    const FIELDS: &'static [Field] = &[
        Field::required("sticker", "sticker"),
        Field::required("emoji_list", "emoji_list"),
        Field::required("format", "format"),
        Field::optional("mask_position", "mask_position"),
        Field::optional("keywords", "keywords"),
    ];
}

impl Validate for InputSticker {
    fn validate(&self) -> Result<(), ValidationError> {
        present(self.sticker.as_ref(), "Sticker can't be empty", self)?;
        count_between(
            self.emoji_list.len(),
            1,
            20,
            "Emoji list must have between 1 and 20 items",
            self,
        )?;
        count_between(
            self.keywords.len(),
            0,
            20,
            "Keywords list must have between 0 and 20 items",
            self,
        )?;
        one_of(
            &self.format,
            &STICKER_FORMATS,
            "Format must be 'static', 'animated', 'video'",
            self,
        )?;
        self.mask_position.validate()?;
        self.sticker.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::tests::assert_mapping;
    use crate::fields::to_wire_fields;
    use serde_json::json;

    fn sticker() -> InputSticker {
        InputSticker::new(InputFile::existing("CAACAgIAAxk"), "static").with_emoji("🐱")
    }

    #[test]
    fn emoji_list_bounds() {
        let emoji = |n: usize| vec!["🙂".to_string(); n];

        assert!(sticker().with_emoji_list(emoji(1)).validate().is_ok());
        assert!(sticker().with_emoji_list(emoji(20)).validate().is_ok());

        let empty = sticker().with_emoji_list(emoji(0)).validate().unwrap_err();
        assert_eq!(empty.rule(), Rule::Length);
        assert_eq!(empty.message(), "Emoji list must have between 1 and 20 items");
        assert!(sticker().with_emoji_list(emoji(21)).validate().is_err());
    }

    #[test]
    fn keywords_are_capped() {
        let mut sticker = sticker();
        sticker.keywords = vec!["cat".to_string(); 20];
        assert!(sticker.validate().is_ok());

        sticker.keywords.push("one more".to_string());
        assert_eq!(
            sticker.validate().unwrap_err().message(),
            "Keywords list must have between 0 and 20 items"
        );
    }

    #[test]
    fn format_is_enumerated() {
        for format in STICKER_FORMATS {
            assert!(sticker().with_format(format).validate().is_ok());
        }
        for format in ["", "STATIC", "gif", "webm"] {
            let error = sticker().with_format(format).validate().unwrap_err();
            assert_eq!(error.rule(), Rule::Enumeration);
            assert_eq!(error.message(), "Format must be 'static', 'animated', 'video'");
        }
    }

    #[test]
    fn missing_file_is_required() {
        let error = InputSticker::default().with_emoji("🐱").validate().unwrap_err();
        assert_eq!(error.rule(), Rule::Required);
        assert_eq!(error.message(), "Sticker can't be empty");
        assert_eq!(error.entity(), "InputSticker");
    }

    #[test]
    fn cascades_into_mask_position_and_file() {
        let mask = sticker()
            .with_mask_position(MaskPosition::new("nose", 0.0, 0.0, 1.0))
            .validate()
            .unwrap_err();
        assert_eq!(mask.entity(), "MaskPosition");
        assert_eq!(mask.rule(), Rule::Enumeration);

        let file = sticker()
            .with_sticker(InputFile::existing(""))
            .validate()
            .unwrap_err();
        assert_eq!(file.entity(), "InputFile");
        assert_eq!(file.message(), "File_id can't be empty");
    }

    #[test]
    fn wire_keys() {
        let full = sticker()
            .with_mask_position(MaskPosition::new("eyes", 0.1, -0.2, 1.5))
            .with_keyword("cat");
        assert_mapping(&full);

        let map = to_wire_fields(&sticker()).unwrap();
        assert_eq!(
            serde_json::Value::Object(map),
            json!({ "sticker": "CAACAgIAAxk", "emoji_list": ["🐱"], "format": "static" })
        );
    }

    #[test]
    fn mask_position_mapping() {
        assert_mapping(&MaskPosition::new("chin", 0.0, 0.5, 2.0));
        assert_eq!(
            MaskPosition::default().validate().unwrap_err().message(),
            "Point can't be empty"
        );
    }

    #[test]
    fn mask_position_numbers_are_finite() {
        assert!(MaskPosition::new("eyes", -1.5, 0.0, 0.5).validate().is_ok());

        for (x_shift, y_shift) in [(f64::NAN, 0.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, 0.0)] {
            let error = MaskPosition::new("eyes", x_shift, y_shift, 1.0)
                .validate()
                .unwrap_err();
            assert_eq!(error.rule(), Rule::Range);
            assert_eq!(error.message(), "Shift must be a finite number");
        }

        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let error = MaskPosition::new("eyes", 0.0, 0.0, scale)
                .validate()
                .unwrap_err();
            assert_eq!(error.rule(), Rule::Range);
            assert_eq!(error.message(), "Scale must be a positive finite number");
        }
    }

    #[test]
    fn invalid_mask_numbers_fail_through_the_sticker() {
        let error = sticker()
            .with_mask_position(MaskPosition::new("eyes", f64::NAN, f64::INFINITY, -1.0))
            .validate()
            .unwrap_err();
        assert_eq!(error.entity(), "MaskPosition");
        assert_eq!(error.rule(), Rule::Range);
    }
}
