use std::io;

use tgstickers::{AccessToken, GetStickerSet, StickerSetName, TelegramClient};
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
    let name = std::env::var("TELEGRAM_STICKER_SET").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELEGRAM_STICKER_SET environment variable is required",
        )
    })?;

    let client = TelegramClient::new(AccessToken::new(token)?);
    let set = client
        .get_sticker_set(GetStickerSet::new(StickerSetName::new(name)?))
        .await?;

    println!("{}", serde_json::to_string_pretty(&set)?);
    Ok(())
}
