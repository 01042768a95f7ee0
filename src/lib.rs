//! Typed Rust client for the Telegram Bot API sticker and message endpoints.
//!
//! The crate has three layers: a domain layer of strong types, a transport layer
//! for the JSON wire format (snake_case bodies and `{ ok, result }` envelopes), and a
//! small client layer issuing one `POST` per call.
//!
//! ```rust,no_run
//! use tgstickers::{AccessToken, GetStickerSet, StickerSetName, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tgstickers::TelegramError> {
//!     let client = TelegramClient::new(AccessToken::new("123456:ABC")?);
//!     let name = StickerSetName::new("sticker_set_by_bot")?;
//!     let set = client.get_sticker_set(GetStickerSet::new(name)).await?;
//!     println!("{} stickers", set.stickers.len());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{TelegramClient, TelegramClientBuilder, TelegramError};
pub use domain::{
    AccessToken, AddStickerOptions, AddStickerToSet, Chat, ChatId, ChatType,
    CreateNewStickerSet, CreateStickerSetOptions, DeleteStickerFromSet, Emojis, ErrorResponse,
    FileId, GetStickerSet, InputFile, MaskPoint, MaskPosition, Message, MessageId, MessageText,
    ParseMode, PhotoSize, ResponseParameters, SendMessage, SendMessageOptions, SendSticker,
    SendStickerOptions, SetStickerPositionInSet, SetStickerSetThumb, SetStickerSetThumbOptions,
    Sticker, StickerSet, StickerSetName, StickerSetTitle, User, UserId, ValidationError,
};
