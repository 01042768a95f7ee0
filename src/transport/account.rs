use serde_json::{Map, Value};

use super::envelope::{Reply, TransportError, decode_envelope};
use super::types::UserJson;
use crate::domain::User;

pub fn encode_get_me_body() -> Value {
    Value::Object(Map::new())
}

pub fn decode_user_json_response(json: &str) -> Result<Reply<User>, TransportError> {
    decode_envelope::<UserJson>(json)?.try_map(|user| Ok(User::from(user)))
}
