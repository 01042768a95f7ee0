use crate::domain::value::{
    ChatId, Emojis, FileId, InputFile, MaskPosition, MessageId, MessageText, ParseMode,
    StickerSetName, StickerSetTitle, UserId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetStickerSet {
    name: StickerSetName,
}

impl GetStickerSet {
    pub fn new(name: StickerSetName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &StickerSetName {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateStickerSetOptions {
    pub contains_masks: Option<bool>,
    pub mask_position: Option<MaskPosition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateNewStickerSet {
    user_id: UserId,
    name: StickerSetName,
    title: StickerSetTitle,
    png_sticker: InputFile,
    emojis: Emojis,
    options: CreateStickerSetOptions,
}

impl CreateNewStickerSet {
    pub fn new(
        user_id: UserId,
        name: StickerSetName,
        title: StickerSetTitle,
        png_sticker: InputFile,
        emojis: Emojis,
        options: CreateStickerSetOptions,
    ) -> Self {
        Self {
            user_id,
            name,
            title,
            png_sticker,
            emojis,
            options,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> &StickerSetName {
        &self.name
    }

    pub fn title(&self) -> &StickerSetTitle {
        &self.title
    }

    pub fn png_sticker(&self) -> &InputFile {
        &self.png_sticker
    }

    pub fn emojis(&self) -> &Emojis {
        &self.emojis
    }

    pub fn options(&self) -> &CreateStickerSetOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddStickerOptions {
    pub mask_position: Option<MaskPosition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddStickerToSet {
    user_id: UserId,
    name: StickerSetName,
    png_sticker: InputFile,
    emojis: Emojis,
    options: AddStickerOptions,
}

impl AddStickerToSet {
    pub fn new(
        user_id: UserId,
        name: StickerSetName,
        png_sticker: InputFile,
        emojis: Emojis,
        options: AddStickerOptions,
    ) -> Self {
        Self {
            user_id,
            name,
            png_sticker,
            emojis,
            options,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> &StickerSetName {
        &self.name
    }

    pub fn png_sticker(&self) -> &InputFile {
        &self.png_sticker
    }

    pub fn emojis(&self) -> &Emojis {
        &self.emojis
    }

    pub fn options(&self) -> &AddStickerOptions {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetStickerPositionInSet {
    sticker: FileId,
    position: u32,
}

impl SetStickerPositionInSet {
    /// `position` is zero-based.
    pub fn new(sticker: FileId, position: u32) -> Self {
        Self { sticker, position }
    }

    pub fn sticker(&self) -> &FileId {
        &self.sticker
    }

    pub fn position(&self) -> u32 {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStickerFromSet {
    sticker: FileId,
}

impl DeleteStickerFromSet {
    pub fn new(sticker: FileId) -> Self {
        Self { sticker }
    }

    pub fn sticker(&self) -> &FileId {
        &self.sticker
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetStickerSetThumbOptions {
    /// Leaving this unset drops the current thumbnail.
    pub thumb: Option<InputFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetStickerSetThumb {
    name: StickerSetName,
    user_id: UserId,
    options: SetStickerSetThumbOptions,
}

impl SetStickerSetThumb {
    pub fn new(name: StickerSetName, user_id: UserId, options: SetStickerSetThumbOptions) -> Self {
        Self {
            name,
            user_id,
            options,
        }
    }

    pub fn name(&self) -> &StickerSetName {
        &self.name
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn options(&self) -> &SetStickerSetThumbOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendStickerOptions {
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<MessageId>,
    pub allow_sending_without_reply: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSticker {
    chat_id: ChatId,
    sticker: InputFile,
    options: SendStickerOptions,
}

impl SendSticker {
    pub fn new(chat_id: impl Into<ChatId>, sticker: InputFile, options: SendStickerOptions) -> Self {
        Self {
            chat_id: chat_id.into(),
            sticker,
            options,
        }
    }

    pub fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }

    pub fn sticker(&self) -> &InputFile {
        &self.sticker
    }

    pub fn options(&self) -> &SendStickerOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendMessageOptions {
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: Option<bool>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<MessageId>,
    pub allow_sending_without_reply: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    chat_id: ChatId,
    text: MessageText,
    options: SendMessageOptions,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: MessageText, options: SendMessageOptions) -> Self {
        Self {
            chat_id: chat_id.into(),
            text,
            options,
        }
    }

    pub fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendMessageOptions {
        &self.options
    }
}
