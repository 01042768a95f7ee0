use std::io;
use std::time::Duration;

use tgstickers::{
    AccessToken, CreateNewStickerSet, CreateStickerSetOptions, Emojis, InputFile,
    StickerSetName, StickerSetTitle, TelegramClient, UserId,
};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = AccessToken::new(required_env("TELEGRAM_ACCESS_TOKEN")?)?;
    let user_id = UserId::new(required_env("TELEGRAM_USER_ID")?.parse()?);
    // Telegram requires set names to end with `_by_<bot username>`.
    let name = StickerSetName::new(required_env("TELEGRAM_STICKER_SET")?)?;
    let png = InputFile::new(required_env("TELEGRAM_STICKER_PNG_URL")?)?;

    let client = TelegramClient::builder(token)
        .timeout(Duration::from_secs(30))
        .build()?;

    let request = CreateNewStickerSet::new(
        user_id,
        name,
        StickerSetTitle::new("Demo stickers")?,
        png,
        Emojis::new("💛")?,
        CreateStickerSetOptions::default(),
    );
    let created = client.create_new_sticker_set(request).await?;
    println!("created: {created}");
    Ok(())
}
