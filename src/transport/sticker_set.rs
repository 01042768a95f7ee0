use serde_json::{Map, Value, json};

use super::envelope::{Reply, TransportError, decode_envelope};
use super::types::StickerSetJson;
use crate::domain::{
    AddStickerToSet, CreateNewStickerSet, DeleteStickerFromSet, Emojis, FileId, GetStickerSet,
    MaskPosition, SetStickerPositionInSet, SetStickerSetThumb, StickerSet, StickerSetName,
    StickerSetTitle, UserId,
};

fn mask_position_json(position: &MaskPosition) -> Value {
    json!({
        "point": position.point().as_str(),
        "x_shift": position.x_shift(),
        "y_shift": position.y_shift(),
        "scale": position.scale(),
    })
}

pub fn encode_get_sticker_set_body(request: &GetStickerSet) -> Value {
    let mut body = Map::new();
    body.insert(
        StickerSetName::FIELD.to_owned(),
        request.name().as_str().into(),
    );
    Value::Object(body)
}

pub fn encode_create_new_sticker_set_body(request: &CreateNewStickerSet) -> Value {
    let mut body = Map::new();
    body.insert(UserId::FIELD.to_owned(), request.user_id().value().into());
    body.insert(
        StickerSetName::FIELD.to_owned(),
        request.name().as_str().into(),
    );
    body.insert(
        StickerSetTitle::FIELD.to_owned(),
        request.title().as_str().into(),
    );
    body.insert(
        "png_sticker".to_owned(),
        request.png_sticker().as_str().into(),
    );
    body.insert(Emojis::FIELD.to_owned(), request.emojis().as_str().into());

    let options = request.options();
    if let Some(contains_masks) = options.contains_masks {
        body.insert("contains_masks".to_owned(), contains_masks.into());
    }
    if let Some(position) = options.mask_position.as_ref() {
        body.insert(MaskPosition::FIELD.to_owned(), mask_position_json(position));
    }
    Value::Object(body)
}

pub fn encode_add_sticker_to_set_body(request: &AddStickerToSet) -> Value {
    let mut body = Map::new();
    body.insert(UserId::FIELD.to_owned(), request.user_id().value().into());
    body.insert(
        StickerSetName::FIELD.to_owned(),
        request.name().as_str().into(),
    );
    body.insert(
        "png_sticker".to_owned(),
        request.png_sticker().as_str().into(),
    );
    body.insert(Emojis::FIELD.to_owned(), request.emojis().as_str().into());

    if let Some(position) = request.options().mask_position.as_ref() {
        body.insert(MaskPosition::FIELD.to_owned(), mask_position_json(position));
    }
    Value::Object(body)
}

pub fn encode_set_sticker_position_in_set_body(request: &SetStickerPositionInSet) -> Value {
    let mut body = Map::new();
    body.insert(FileId::FIELD.to_owned(), request.sticker().as_str().into());
    body.insert("position".to_owned(), request.position().into());
    Value::Object(body)
}

pub fn encode_delete_sticker_from_set_body(request: &DeleteStickerFromSet) -> Value {
    let mut body = Map::new();
    body.insert(FileId::FIELD.to_owned(), request.sticker().as_str().into());
    Value::Object(body)
}

pub fn encode_set_sticker_set_thumb_body(request: &SetStickerSetThumb) -> Value {
    let mut body = Map::new();
    body.insert(
        StickerSetName::FIELD.to_owned(),
        request.name().as_str().into(),
    );
    body.insert(UserId::FIELD.to_owned(), request.user_id().value().into());
    if let Some(thumb) = request.options().thumb.as_ref() {
        body.insert("thumb".to_owned(), thumb.as_str().into());
    }
    Value::Object(body)
}

pub fn decode_sticker_set_json_response(json: &str) -> Result<Reply<StickerSet>, TransportError> {
    decode_envelope::<StickerSetJson>(json)?.try_map(StickerSet::try_from)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        AddStickerOptions, CreateStickerSetOptions, InputFile, MaskPoint,
        SetStickerSetThumbOptions,
    };

    fn eyes_mask() -> MaskPosition {
        MaskPosition::new(MaskPoint::Eyes, 10.0, 10.0, 1.0).unwrap()
    }

    #[test]
    fn encode_get_sticker_set_body_has_only_name() {
        let request = GetStickerSet::new(StickerSetName::new("sticker set name").unwrap());
        assert_eq!(
            encode_get_sticker_set_body(&request),
            json!({ "name": "sticker set name" })
        );
    }

    #[test]
    fn encode_create_new_sticker_set_body_with_mask() {
        let request = CreateNewStickerSet::new(
            UserId::new(1),
            StickerSetName::new("sticker_set_name").unwrap(),
            StickerSetTitle::new("title").unwrap(),
            InputFile::new("https://example.com/sticker.png").unwrap(),
            Emojis::new("💛").unwrap(),
            CreateStickerSetOptions {
                contains_masks: Some(true),
                mask_position: Some(eyes_mask()),
            },
        );

        assert_eq!(
            encode_create_new_sticker_set_body(&request),
            json!({
                "user_id": 1,
                "name": "sticker_set_name",
                "title": "title",
                "png_sticker": "https://example.com/sticker.png",
                "emojis": "💛",
                "contains_masks": true,
                "mask_position": {
                    "point": "eyes",
                    "x_shift": 10.0,
                    "y_shift": 10.0,
                    "scale": 1.0
                }
            })
        );
    }

    #[test]
    fn encode_create_new_sticker_set_body_omits_unset_options() {
        let request = CreateNewStickerSet::new(
            UserId::new(1),
            StickerSetName::new("sticker_set_name").unwrap(),
            StickerSetTitle::new("title").unwrap(),
            InputFile::new("https://example.com/sticker.png").unwrap(),
            Emojis::new("💛").unwrap(),
            CreateStickerSetOptions::default(),
        );

        assert_eq!(
            encode_create_new_sticker_set_body(&request),
            json!({
                "user_id": 1,
                "name": "sticker_set_name",
                "title": "title",
                "png_sticker": "https://example.com/sticker.png",
                "emojis": "💛"
            })
        );
    }

    #[test]
    fn encode_add_sticker_to_set_body_with_mask() {
        let request = AddStickerToSet::new(
            UserId::new(1),
            StickerSetName::new("sticker_set_name").unwrap(),
            InputFile::new("https://example.com/sticker.png").unwrap(),
            Emojis::new("💛").unwrap(),
            AddStickerOptions {
                mask_position: Some(eyes_mask()),
            },
        );

        assert_eq!(
            encode_add_sticker_to_set_body(&request),
            json!({
                "user_id": 1,
                "name": "sticker_set_name",
                "png_sticker": "https://example.com/sticker.png",
                "emojis": "💛",
                "mask_position": {
                    "point": "eyes",
                    "x_shift": 10.0,
                    "y_shift": 10.0,
                    "scale": 1.0
                }
            })
        );
    }

    #[test]
    fn encode_add_sticker_to_set_body_omits_unset_mask() {
        let request = AddStickerToSet::new(
            UserId::new(1),
            StickerSetName::new("sticker_set_name").unwrap(),
            InputFile::new("https://example.com/sticker.png").unwrap(),
            Emojis::new("💛").unwrap(),
            AddStickerOptions::default(),
        );

        assert_eq!(
            encode_add_sticker_to_set_body(&request),
            json!({
                "user_id": 1,
                "name": "sticker_set_name",
                "png_sticker": "https://example.com/sticker.png",
                "emojis": "💛"
            })
        );
    }

    #[test]
    fn encode_sticker_position_and_delete_bodies() {
        let sticker = FileId::new("CAADBAADQwEAAhA1aAABVQO2hjT7dSEWB").unwrap();

        let position = SetStickerPositionInSet::new(sticker.clone(), 0);
        assert_eq!(
            encode_set_sticker_position_in_set_body(&position),
            json!({ "sticker": "CAADBAADQwEAAhA1aAABVQO2hjT7dSEWB", "position": 0 })
        );

        let delete = DeleteStickerFromSet::new(sticker);
        assert_eq!(
            encode_delete_sticker_from_set_body(&delete),
            json!({ "sticker": "CAADBAADQwEAAhA1aAABVQO2hjT7dSEWB" })
        );
    }

    #[test]
    fn encode_set_sticker_set_thumb_body_thumb_is_optional() {
        let name = StickerSetName::new("sticker_set_name").unwrap();

        let without = SetStickerSetThumb::new(
            name.clone(),
            UserId::new(1),
            SetStickerSetThumbOptions::default(),
        );
        assert_eq!(
            encode_set_sticker_set_thumb_body(&without),
            json!({ "name": "sticker_set_name", "user_id": 1 })
        );

        let with = SetStickerSetThumb::new(
            name,
            UserId::new(1),
            SetStickerSetThumbOptions {
                thumb: Some(InputFile::new("https://example.com/thumb.png").unwrap()),
            },
        );
        assert_eq!(
            encode_set_sticker_set_thumb_body(&with),
            json!({
                "name": "sticker_set_name",
                "user_id": 1,
                "thumb": "https://example.com/thumb.png"
            })
        );
    }

    #[test]
    fn decode_sticker_set_mirrors_result_in_camel_case() {
        let json = r#"
        {
          "ok": true,
          "result": {
            "name": "sticker set name",
            "title": "sticker set title",
            "is_animated": false,
            "contains_masks": false,
            "stickers": [
              {
                "width": 512,
                "height": 512,
                "emoji": "💛",
                "set_name": "sticker set name",
                "is_animated": false,
                "thumb": {
                  "file_id": "AAQEAANDAQACEDVoAAFVA7aGNPt1If3eYTAABAEAB20AAzkOAAIWB",
                  "file_size": 5706,
                  "width": 128,
                  "height": 128
                },
                "file_id": "CAADBAADQwEAAhA1aAABVQO2hjT7dSEWB",
                "file_size": 36424
              }
            ]
          }
        }
        "#;

        let Reply::Ok(set) = decode_sticker_set_json_response(json).unwrap() else {
            panic!("expected ok reply");
        };
        assert_eq!(set.stickers.len(), 1);
        assert_eq!(
            set.stickers[0].set_name.as_deref(),
            Some("sticker set name")
        );

        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({
                "name": "sticker set name",
                "title": "sticker set title",
                "isAnimated": false,
                "containsMasks": false,
                "stickers": [
                    {
                        "width": 512,
                        "height": 512,
                        "emoji": "💛",
                        "setName": "sticker set name",
                        "isAnimated": false,
                        "thumb": {
                            "fileId": "AAQEAANDAQACEDVoAAFVA7aGNPt1If3eYTAABAEAB20AAzkOAAIWB",
                            "fileSize": 5706,
                            "width": 128,
                            "height": 128
                        },
                        "fileId": "CAADBAADQwEAAhA1aAABVQO2hjT7dSEWB",
                        "fileSize": 36424
                    }
                ]
            })
        );
    }

    #[test]
    fn decode_sticker_set_failure_is_passed_through() {
        let json = r#"{"ok":false,"error_code":400,"description":"Bad Request: STICKERSET_INVALID"}"#;
        let reply = decode_sticker_set_json_response(json).unwrap();
        assert!(matches!(
            reply,
            Reply::Failed(ref error) if error.error_code == Some(400)
        ));
    }
}
