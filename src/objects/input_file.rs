use crate::error::{Rule, ValidationError};
use crate::validation::{non_empty, Validate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Formatter};

/// A file to send: either something Telegram can already reach (a `file_id` or an HTTP URL),
/// or new content uploaded with multipart/form-data.
///
/// On the wire an existing file is its id or URL, a new upload is `attach://<attach_name>`
/// and its bytes travel as a separate part named `attach_name`.
#[derive(Clone, Eq, PartialEq)]
pub enum InputFile {
    Existing(String),
    Upload {
        attach_name: String,
        file_name: String,
        data: Vec<u8>,
    },
}

impl InputFile {
    /// A `file_id` of a file stored on Telegram servers, or an HTTP URL.
    pub fn existing(id_or_url: impl Into<String>) -> Self {
        Self::Existing(id_or_url.into())
    }

    pub fn upload(
        attach_name: impl Into<String>,
        file_name: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self::Upload {
            attach_name: attach_name.into(),
            file_name: file_name.into(),
            data,
        }
    }

    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }

    /// Value sent in the JSON field that references this file.
    pub fn wire_value(&self) -> String {
        match self {
            Self::Existing(id) => id.clone(),
            Self::Upload { attach_name, .. } => format!("attach://{attach_name}"),
        }
    }
}

impl Debug for InputFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Existing(id) => f.debug_tuple("Existing").field(id).finish(),
            Self::Upload {
                attach_name,
                file_name,
                data,
            } => f
                .debug_struct("Upload")
                .field("attach_name", attach_name)
                .field("file_name", file_name)
                .field("len", &data.len())
                .finish(),
        }
    }
}

impl Serialize for InputFile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.wire_value())
    }
}

/// Files coming back from the API are always references to existing files.
impl<'de> Deserialize<'de> for InputFile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::Existing)
    }
}

impl Validate for InputFile {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Existing(id) => non_empty(id, "File_id can't be empty", self),
            Self::Upload {
                attach_name,
                file_name,
                data,
            } => {
                non_empty(file_name, "Media name can't be empty", self)?;
                if data.is_empty() {
                    return Err(ValidationError::new(
                        Rule::Required,
                        "Media can't be empty",
                        self,
                    ));
                }
                if attach_name.is_empty()
                    || !attach_name
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_')
                {
                    return Err(ValidationError::new(
                        Rule::Enumeration,
                        "Attach name must be made of latin letters, digits and underscores",
                        self,
                    ));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_reference_or_attachment() {
        assert_eq!(
            serde_json::to_value(InputFile::existing("CAACAgIAAxk")).unwrap(),
            json!("CAACAgIAAxk")
        );
        assert_eq!(
            serde_json::to_value(InputFile::upload("sticker0", "cat.webp", vec![1, 2, 3])).unwrap(),
            json!("attach://sticker0")
        );
    }

    #[test]
    fn debug_hides_content() {
        let file = InputFile::upload("sticker0", "cat.webp", vec![0; 4096]);
        assert_eq!(
            format!("{file:?}"),
            r#"Upload { attach_name: "sticker0", file_name: "cat.webp", len: 4096 }"#
        );
    }

    #[test]
    fn validates_each_kind() {
        assert!(InputFile::existing("https://example.com/cat.webp").validate().is_ok());
        assert_eq!(
            InputFile::existing("").validate().unwrap_err().message(),
            "File_id can't be empty"
        );
        assert_eq!(
            InputFile::upload("a", "", vec![1]).validate().unwrap_err().message(),
            "Media name can't be empty"
        );
        assert_eq!(
            InputFile::upload("a", "cat.webp", Vec::new())
                .validate()
                .unwrap_err()
                .message(),
            "Media can't be empty"
        );
        assert_eq!(
            InputFile::upload("cat.webp", "cat.webp", vec![1])
                .validate()
                .unwrap_err()
                .rule(),
            Rule::Enumeration
        );
    }
}
