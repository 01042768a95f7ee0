use serde_json::{Map, Value};

use super::envelope::{Reply, TransportError, decode_envelope};
use super::types::MessageJson;
use crate::domain::{
    ChatId, Message, MessageId, MessageText, ParseMode, SendMessage, SendSticker,
};

fn chat_id_json(chat_id: &ChatId) -> Value {
    match chat_id {
        ChatId::Id(id) => Value::from(*id),
        ChatId::Username(username) => Value::from(username.as_str()),
    }
}

fn push_reply_options(
    body: &mut Map<String, Value>,
    disable_notification: Option<bool>,
    reply_to_message_id: Option<MessageId>,
    allow_sending_without_reply: Option<bool>,
) {
    if let Some(disable_notification) = disable_notification {
        body.insert(
            "disable_notification".to_owned(),
            disable_notification.into(),
        );
    }
    if let Some(reply_to) = reply_to_message_id {
        body.insert(MessageId::REPLY_FIELD.to_owned(), reply_to.value().into());
    }
    if let Some(allow) = allow_sending_without_reply {
        body.insert("allow_sending_without_reply".to_owned(), allow.into());
    }
}

pub fn encode_send_sticker_body(request: &SendSticker) -> Value {
    let mut body = Map::new();
    body.insert(ChatId::FIELD.to_owned(), chat_id_json(request.chat_id()));
    body.insert("sticker".to_owned(), request.sticker().as_str().into());

    let options = request.options();
    push_reply_options(
        &mut body,
        options.disable_notification,
        options.reply_to_message_id,
        options.allow_sending_without_reply,
    );
    Value::Object(body)
}

pub fn encode_send_message_body(request: &SendMessage) -> Value {
    let mut body = Map::new();
    body.insert(ChatId::FIELD.to_owned(), chat_id_json(request.chat_id()));
    body.insert(MessageText::FIELD.to_owned(), request.text().as_str().into());

    let options = request.options();
    if let Some(parse_mode) = options.parse_mode {
        body.insert(ParseMode::FIELD.to_owned(), parse_mode.as_str().into());
    }
    if let Some(disable_preview) = options.disable_web_page_preview {
        body.insert(
            "disable_web_page_preview".to_owned(),
            disable_preview.into(),
        );
    }
    push_reply_options(
        &mut body,
        options.disable_notification,
        options.reply_to_message_id,
        options.allow_sending_without_reply,
    );
    Value::Object(body)
}

pub fn decode_message_json_response(json: &str) -> Result<Reply<Message>, TransportError> {
    decode_envelope::<MessageJson>(json)?.try_map(Message::try_from)
}
