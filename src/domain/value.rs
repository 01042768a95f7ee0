use std::fmt;

use serde::Serialize;

use crate::domain::validation::ValidationError;

fn trimmed_non_empty(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn check_max_chars(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Bot token issued by @BotFather.
///
/// Invariant: non-empty after trimming. `Debug` output never contains the token.
pub struct AccessToken(String);

impl AccessToken {
    /// Name used in validation errors (`access_token`).
    pub const FIELD: &'static str = "access_token";

    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(value.into(), Self::FIELD)?))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Target chat (`chat_id`): a numeric id or a public `@username`.
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl ChatId {
    /// JSON field name used by Telegram (`chat_id`).
    pub const FIELD: &'static str = "chat_id";

    /// Create a username target. A leading `@` is added when missing.
    pub fn username(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = trimmed_non_empty(value.into(), Self::FIELD)?;
        if value.starts_with('@') {
            if value.len() == 1 {
                return Err(ValidationError::Empty { field: Self::FIELD });
            }
            return Ok(Self::Username(value));
        }
        Ok(Self::Username(format!("@{value}")))
    }
}

impl From<i64> for ChatId {
    fn from(value: i64) -> Self {
        Self::Id(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Telegram user id (`user_id`).
pub struct UserId(i64);

impl UserId {
    /// JSON field name used by Telegram (`user_id`).
    pub const FIELD: &'static str = "user_id";

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Message identifier inside a chat.
pub struct MessageId(i64);

impl MessageId {
    /// JSON field name used by Telegram when replying (`reply_to_message_id`).
    pub const REPLY_FIELD: &'static str = "reply_to_message_id";

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sticker set short name (`name`), used in `t.me/addstickers/` links.
///
/// Invariant: non-empty after trimming, at most [`StickerSetName::MAX_CHARS`] characters.
pub struct StickerSetName(String);

impl StickerSetName {
    /// JSON field name used by Telegram (`name`).
    pub const FIELD: &'static str = "name";

    pub const MAX_CHARS: usize = 64;

    /// Create a validated [`StickerSetName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = trimmed_non_empty(value.into(), Self::FIELD)?;
        check_max_chars(&value, Self::FIELD, Self::MAX_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sticker set title (`title`).
///
/// Invariant: non-empty after trimming, at most [`StickerSetTitle::MAX_CHARS`] characters.
pub struct StickerSetTitle(String);

impl StickerSetTitle {
    /// JSON field name used by Telegram (`title`).
    pub const FIELD: &'static str = "title";

    pub const MAX_CHARS: usize = 64;

    /// Create a validated [`StickerSetTitle`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = trimmed_non_empty(value.into(), Self::FIELD)?;
        check_max_chars(&value, Self::FIELD, Self::MAX_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One or more emoji bound to a sticker (`emojis`).
///
/// Invariant: non-empty after trimming.
pub struct Emojis(String);

impl Emojis {
    /// JSON field name used by Telegram (`emojis`).
    pub const FIELD: &'static str = "emojis";

    /// Create validated [`Emojis`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(value.into(), Self::FIELD)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A file already known to Telegram (file id) or an HTTP URL Telegram will fetch.
///
/// Invariant: non-empty after trimming. Multipart uploads are not supported.
pub struct InputFile(String);

impl InputFile {
    /// Name used in validation errors (`input_file`).
    pub const FIELD: &'static str = "input_file";

    /// Create a validated [`InputFile`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(value.into(), Self::FIELD)?))
    }

    /// Borrow the file id or URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Telegram file identifier of an existing sticker (`sticker`).
///
/// Invariant: non-empty after trimming.
pub struct FileId(String);

impl FileId {
    /// JSON field name used by Telegram in sticker set edits (`sticker`).
    pub const FIELD: &'static str = "sticker";

    /// Create a validated [`FileId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(value.into(), Self::FIELD)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Text message body (`text`).
///
/// Invariant: non-empty after trimming, at most [`MessageText::MAX_CHARS`] characters.
/// The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by Telegram (`text`).
    pub const FIELD: &'static str = "text";

    pub const MAX_CHARS: usize = 4096;

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        check_max_chars(&value, Self::FIELD, Self::MAX_CHARS)?;
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Face part a mask sticker is anchored to.
pub enum MaskPoint {
    Forehead,
    Eyes,
    Mouth,
    Chin,
}

impl MaskPoint {
    /// Wire representation of the point.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forehead => "forehead",
            Self::Eyes => "eyes",
            Self::Mouth => "mouth",
            Self::Chin => "chin",
        }
    }

    /// Parse the wire representation; unknown points yield `None`.
    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "forehead" => Self::Forehead,
            "eyes" => Self::Eyes,
            "mouth" => Self::Mouth,
            "chin" => Self::Chin,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Placement of a mask sticker on a face (`mask_position`).
///
/// Shifts are measured in face widths/heights, `scale` is a size multiplier.
///
/// Invariant: all three numbers are finite. They always go on the wire as JSON floats,
/// so a whole shift of `10` is sent as `10.0`; Telegram treats both the same.
pub struct MaskPosition {
    point: MaskPoint,
    x_shift: f64,
    y_shift: f64,
    scale: f64,
}

impl MaskPosition {
    /// JSON field name used by Telegram (`mask_position`).
    pub const FIELD: &'static str = "mask_position";

    /// Create a validated [`MaskPosition`], rejecting NaN and infinite values.
    pub fn new(
        point: MaskPoint,
        x_shift: f64,
        y_shift: f64,
        scale: f64,
    ) -> Result<Self, ValidationError> {
        for (field, value) in [("x_shift", x_shift), ("y_shift", y_shift), ("scale", scale)] {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { field });
            }
        }
        Ok(Self {
            point,
            x_shift,
            y_shift,
            scale,
        })
    }

    pub fn point(&self) -> MaskPoint {
        self.point
    }

    pub fn x_shift(&self) -> f64 {
        self.x_shift
    }

    pub fn y_shift(&self) -> f64 {
        self.y_shift
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Text parsing mode for `sendMessage` (`parse_mode`).
pub enum ParseMode {
    Markdown,
    MarkdownV2,
    Html,
}

impl ParseMode {
    /// JSON field name used by Telegram (`parse_mode`).
    pub const FIELD: &'static str = "parse_mode";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "Markdown",
            Self::MarkdownV2 => "MarkdownV2",
            Self::Html => "HTML",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let token = AccessToken::new(" 123456:ABC ").unwrap();
        assert_eq!(token.as_str(), "123456:ABC");
        assert!(AccessToken::new("  ").is_err());

        let name = StickerSetName::new(" set_by_bot ").unwrap();
        assert_eq!(name.as_str(), "set_by_bot");
        assert!(StickerSetName::new("").is_err());

        let title = StickerSetTitle::new(" Title ").unwrap();
        assert_eq!(title.as_str(), "Title");

        let emojis = Emojis::new(" 💛 ").unwrap();
        assert_eq!(emojis.as_str(), "💛");
        assert!(Emojis::new(" ").is_err());

        let file = InputFile::new(" https://example.com/sticker.png ").unwrap();
        assert_eq!(file.as_str(), "https://example.com/sticker.png");

        let file_id = FileId::new(" CAADBAADQwEAAhA1aAABVQO2hjT7dSEWB ").unwrap();
        assert_eq!(file_id.as_str(), "CAADBAADQwEAAhA1aAABVQO2hjT7dSEWB");
        assert!(FileId::new("").is_err());

        let text = MessageText::new(" hi ").unwrap();
        assert_eq!(text.as_str(), " hi ");
        assert!(MessageText::new("   ").is_err());
    }

    #[test]
    fn sticker_set_name_and_title_enforce_length() {
        assert!(StickerSetName::new("a".repeat(StickerSetName::MAX_CHARS)).is_ok());
        assert_eq!(
            StickerSetTitle::new("é".repeat(StickerSetTitle::MAX_CHARS + 1)),
            Err(ValidationError::TooLong {
                field: StickerSetTitle::FIELD,
                max: StickerSetTitle::MAX_CHARS,
                actual: StickerSetTitle::MAX_CHARS + 1,
            })
        );
    }

    #[test]
    fn message_text_counts_characters_not_bytes() {
        assert!(MessageText::new("✊".repeat(MessageText::MAX_CHARS)).is_ok());
        assert!(MessageText::new("x".repeat(MessageText::MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn chat_id_username_is_prefixed() {
        assert_eq!(
            ChatId::username("channel").unwrap(),
            ChatId::Username("@channel".to_owned())
        );
        assert_eq!(
            ChatId::username(" @channel ").unwrap(),
            ChatId::Username("@channel".to_owned())
        );
        assert!(ChatId::username("@").is_err());
        assert!(ChatId::username("  ").is_err());
        assert_eq!(ChatId::from(427770117), ChatId::Id(427770117));
    }

    #[test]
    fn access_token_debug_is_redacted() {
        let token = AccessToken::new("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("ABC-DEF"));
    }

    #[test]
    fn mask_point_wire_mapping() {
        for point in [
            MaskPoint::Forehead,
            MaskPoint::Eyes,
            MaskPoint::Mouth,
            MaskPoint::Chin,
        ] {
            assert_eq!(MaskPoint::from_wire(point.as_str()), Some(point));
        }
        assert_eq!(MaskPoint::from_wire("nose"), None);
    }

    #[test]
    fn mask_position_rejects_non_finite_numbers() {
        assert_eq!(
            MaskPosition::new(MaskPoint::Eyes, f64::NAN, 0.0, 1.0),
            Err(ValidationError::NotFinite { field: "x_shift" })
        );
        assert_eq!(
            MaskPosition::new(MaskPoint::Eyes, 0.0, f64::NEG_INFINITY, 1.0),
            Err(ValidationError::NotFinite { field: "y_shift" })
        );
        assert_eq!(
            MaskPosition::new(MaskPoint::Eyes, 0.0, 0.0, f64::INFINITY),
            Err(ValidationError::NotFinite { field: "scale" })
        );

        let position = MaskPosition::new(MaskPoint::Mouth, -1.5, 0.25, 2.0).unwrap();
        assert_eq!(position.point(), MaskPoint::Mouth);
        assert_eq!(position.x_shift(), -1.5);
        assert_eq!(position.y_shift(), 0.25);
        assert_eq!(position.scale(), 2.0);
    }

    #[test]
    fn parse_mode_wire_names() {
        assert_eq!(ParseMode::Markdown.as_str(), "Markdown");
        assert_eq!(ParseMode::MarkdownV2.as_str(), "MarkdownV2");
        assert_eq!(ParseMode::Html.as_str(), "HTML");
    }
}
