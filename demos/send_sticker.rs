use std::io;

use tgstickers::{AccessToken, InputFile, SendSticker, SendStickerOptions, TelegramClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = std::env::var("TELEGRAM_ACCESS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELEGRAM_ACCESS_TOKEN environment variable is required",
        )
    })?;
    let chat_id: i64 = std::env::var("TELEGRAM_CHAT_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "TELEGRAM_CHAT_ID environment variable is required",
            )
        })?
        .parse()?;
    let sticker = std::env::var("TELEGRAM_STICKER")
        .unwrap_or_else(|_| "CAADAgADQAADyIsGAAE7MpzFPFQX5QI".to_owned());

    let client = TelegramClient::new(AccessToken::new(token)?);
    let options = SendStickerOptions {
        disable_notification: Some(true),
        ..Default::default()
    };
    let message = client
        .send_sticker(SendSticker::new(chat_id, InputFile::new(sticker)?, options))
        .await?;

    println!(
        "message_id: {}, chat: {}, date: {}",
        message.message_id, message.chat.id, message.date
    );
    Ok(())
}
