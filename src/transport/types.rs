//! Wire shapes of Telegram objects and their translation into domain types.

use serde::Deserialize;

use super::envelope::TransportError;
use crate::domain::{
    Chat, ChatType, MaskPoint, MaskPosition, Message, PhotoSize, Sticker, StickerSet, User,
};

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSizeJson {
    file_id: String,
    #[serde(default)]
    file_unique_id: Option<String>,
    width: u32,
    height: u32,
    #[serde(default)]
    file_size: Option<u64>,
}

impl From<PhotoSizeJson> for PhotoSize {
    fn from(value: PhotoSizeJson) -> Self {
        Self {
            file_id: value.file_id,
            file_unique_id: value.file_unique_id,
            width: value.width,
            height: value.height,
            file_size: value.file_size,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaskPositionJson {
    point: String,
    x_shift: f64,
    y_shift: f64,
    scale: f64,
}

impl TryFrom<MaskPositionJson> for MaskPosition {
    type Error = TransportError;

    fn try_from(value: MaskPositionJson) -> Result<Self, Self::Error> {
        let point = MaskPoint::from_wire(&value.point)
            .ok_or(TransportError::UnknownMaskPoint { value: value.point })?;
        Ok(Self::new(point, value.x_shift, value.y_shift, value.scale)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StickerJson {
    file_id: String,
    #[serde(default)]
    file_unique_id: Option<String>,
    width: u32,
    height: u32,
    #[serde(default)]
    is_animated: Option<bool>,
    #[serde(default)]
    thumb: Option<PhotoSizeJson>,
    #[serde(default)]
    emoji: Option<String>,
    #[serde(default)]
    set_name: Option<String>,
    #[serde(default)]
    mask_position: Option<MaskPositionJson>,
    #[serde(default)]
    file_size: Option<u64>,
}

impl TryFrom<StickerJson> for Sticker {
    type Error = TransportError;

    fn try_from(value: StickerJson) -> Result<Self, Self::Error> {
        Ok(Self {
            file_id: value.file_id,
            file_unique_id: value.file_unique_id,
            width: value.width,
            height: value.height,
            is_animated: value.is_animated,
            thumb: value.thumb.map(PhotoSize::from),
            emoji: value.emoji,
            set_name: value.set_name,
            mask_position: value.mask_position.map(MaskPosition::try_from).transpose()?,
            file_size: value.file_size,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StickerSetJson {
    name: String,
    title: String,
    #[serde(default)]
    is_animated: bool,
    #[serde(default)]
    contains_masks: bool,
    #[serde(default)]
    stickers: Vec<StickerJson>,
    #[serde(default)]
    thumb: Option<PhotoSizeJson>,
}

impl TryFrom<StickerSetJson> for StickerSet {
    type Error = TransportError;

    fn try_from(value: StickerSetJson) -> Result<Self, Self::Error> {
        let stickers = value
            .stickers
            .into_iter()
            .map(Sticker::try_from)
            .collect::<Result<Vec<_>, TransportError>>()?;

        Ok(Self {
            name: value.name,
            title: value.title,
            is_animated: value.is_animated,
            contains_masks: value.contains_masks,
            stickers,
            thumb: value.thumb.map(PhotoSize::from),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserJson {
    id: i64,
    #[serde(default)]
    is_bot: Option<bool>,
    first_name: String,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    language_code: Option<String>,
}

impl From<UserJson> for User {
    fn from(value: UserJson) -> Self {
        Self {
            id: value.id,
            is_bot: value.is_bot,
            first_name: value.first_name,
            last_name: value.last_name,
            username: value.username,
            language_code: value.language_code,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatJson {
    id: i64,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

impl From<ChatJson> for Chat {
    fn from(value: ChatJson) -> Self {
        Self {
            id: value.id,
            kind: ChatType::from(value.kind),
            title: value.title,
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageJson {
    message_id: i64,
    #[serde(default)]
    from: Option<UserJson>,
    chat: ChatJson,
    date: i64,
    #[serde(default)]
    reply_to_message: Option<Box<MessageJson>>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    sticker: Option<StickerJson>,
}

impl TryFrom<MessageJson> for Message {
    type Error = TransportError;

    fn try_from(value: MessageJson) -> Result<Self, Self::Error> {
        let reply_to_message = value
            .reply_to_message
            .map(|reply| Message::try_from(*reply).map(Box::new))
            .transpose()?;

        Ok(Self {
            message_id: value.message_id,
            from: value.from.map(User::from),
            chat: Chat::from(value.chat),
            date: value.date,
            reply_to_message,
            text: value.text,
            sticker: value.sticker.map(Sticker::try_from).transpose()?,
        })
    }
}
