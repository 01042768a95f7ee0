//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AddStickerOptions, AddStickerToSet, CreateNewStickerSet, CreateStickerSetOptions,
    DeleteStickerFromSet, GetStickerSet, SendMessage, SendMessageOptions, SendSticker,
    SendStickerOptions, SetStickerPositionInSet, SetStickerSetThumb, SetStickerSetThumbOptions,
};
pub use response::{
    Chat, ChatType, ErrorResponse, Message, PhotoSize, ResponseParameters, Sticker, StickerSet,
    User,
};
pub use validation::ValidationError;
pub use value::{
    AccessToken, ChatId, Emojis, FileId, InputFile, MaskPoint, MaskPosition, MessageId,
    MessageText, ParseMode, StickerSetName, StickerSetTitle, UserId,
};
