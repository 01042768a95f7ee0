//! Transport layer: JSON wire format (request bodies, response envelopes, field translation).

mod account;
mod envelope;
mod message;
mod sticker_set;
mod types;

pub use account::{decode_user_json_response, encode_get_me_body};
pub use envelope::{Reply, TransportError, decode_bool_json_response, decode_error_envelope};
pub use message::{decode_message_json_response, encode_send_message_body, encode_send_sticker_body};
pub use sticker_set::{
    decode_sticker_set_json_response, encode_add_sticker_to_set_body,
    encode_create_new_sticker_set_body, encode_delete_sticker_from_set_body,
    encode_get_sticker_set_body, encode_set_sticker_position_in_set_body,
    encode_set_sticker_set_thumb_body,
};
