//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{
    AccessToken, AddStickerToSet, CreateNewStickerSet, DeleteStickerFromSet, ErrorResponse,
    GetStickerSet, Message, ResponseParameters, SendMessage, SendSticker, SetStickerPositionInSet,
    SetStickerSetThumb, StickerSet, User, ValidationError,
};
use crate::transport::{self, Reply, TransportError};

const DEFAULT_ORIGIN: &str = "https://api.telegram.org";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).json(&body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TelegramClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (`ok: false` envelopes),
/// - validation/parse failures.
pub enum TelegramError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code without a Telegram error envelope.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Telegram answered with `ok: false`.
    #[error("API error: {error_code:?} {description:?}")]
    Api {
        error_code: Option<i32>,
        description: Option<String>,
        parameters: Option<ResponseParameters>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured API origin is not a valid URL.
    #[error("invalid API origin: {0}")]
    InvalidOrigin(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl TelegramError {
    /// Seconds Telegram asked to wait before retrying, if this is a flood-control error.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::Api {
                parameters: Some(parameters),
                ..
            } => parameters.retry_after,
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TelegramClient`].
///
/// Use this when you need to customize the API origin (e.g. a local Bot API server),
/// timeout, or user-agent.
pub struct TelegramClientBuilder {
    token: AccessToken,
    origin: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TelegramClientBuilder {
    /// Create a builder with the default origin and no timeout/user-agent override.
    pub fn new(token: AccessToken) -> Self {
        Self {
            token,
            origin: DEFAULT_ORIGIN.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the Bot API origin (default `https://api.telegram.org`).
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TelegramClient`].
    pub fn build(self) -> Result<TelegramClient, TelegramError> {
        let origin = normalize_origin(&self.origin)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TelegramError::Transport(Box::new(err)))?;

        Ok(TelegramClient {
            token: self.token,
            origin,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn normalize_origin(origin: &str) -> Result<String, TelegramError> {
    let parsed = url::Url::parse(origin.trim())?;
    Ok(parsed.as_str().trim_end_matches('/').to_owned())
}

#[derive(Clone)]
/// High-level Telegram Bot API client.
///
/// Every method sends one JSON `POST` to `{origin}/bot{token}/{method}` and unwraps the
/// `{ ok, result }` envelope.
pub struct TelegramClient {
    token: AccessToken,
    origin: String,
    http: Arc<dyn HttpTransport>,
}

impl TelegramClient {
    /// Create a client using the default origin.
    ///
    /// For more customization, use [`TelegramClient::builder`].
    pub fn new(token: AccessToken) -> Self {
        Self {
            token,
            origin: DEFAULT_ORIGIN.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(token: AccessToken) -> TelegramClientBuilder {
        TelegramClientBuilder::new(token)
    }

    /// Fetch basic information about the bot itself (`getMe`).
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        self.call(
            "getMe",
            transport::encode_get_me_body(),
            transport::decode_user_json_response,
        )
        .await
    }

    /// Fetch a sticker set by name (`getStickerSet`).
    pub async fn get_sticker_set(&self, request: GetStickerSet) -> Result<StickerSet, TelegramError> {
        self.call(
            "getStickerSet",
            transport::encode_get_sticker_set_body(&request),
            transport::decode_sticker_set_json_response,
        )
        .await
    }

    /// Create a sticker set owned by a user (`createNewStickerSet`).
    pub async fn create_new_sticker_set(
        &self,
        request: CreateNewStickerSet,
    ) -> Result<bool, TelegramError> {
        self.call(
            "createNewStickerSet",
            transport::encode_create_new_sticker_set_body(&request),
            transport::decode_bool_json_response,
        )
        .await
    }

    /// Add a sticker to a set created by the bot (`addStickerToSet`).
    pub async fn add_sticker_to_set(&self, request: AddStickerToSet) -> Result<bool, TelegramError> {
        self.call(
            "addStickerToSet",
            transport::encode_add_sticker_to_set_body(&request),
            transport::decode_bool_json_response,
        )
        .await
    }

    /// Move a sticker in a set created by the bot (`setStickerPositionInSet`).
    pub async fn set_sticker_position_in_set(
        &self,
        request: SetStickerPositionInSet,
    ) -> Result<bool, TelegramError> {
        self.call(
            "setStickerPositionInSet",
            transport::encode_set_sticker_position_in_set_body(&request),
            transport::decode_bool_json_response,
        )
        .await
    }

    /// Delete a sticker from a set created by the bot (`deleteStickerFromSet`).
    pub async fn delete_sticker_from_set(
        &self,
        request: DeleteStickerFromSet,
    ) -> Result<bool, TelegramError> {
        self.call(
            "deleteStickerFromSet",
            transport::encode_delete_sticker_from_set_body(&request),
            transport::decode_bool_json_response,
        )
        .await
    }

    /// Set or drop the thumbnail of a sticker set (`setStickerSetThumb`).
    pub async fn set_sticker_set_thumb(
        &self,
        request: SetStickerSetThumb,
    ) -> Result<bool, TelegramError> {
        self.call(
            "setStickerSetThumb",
            transport::encode_set_sticker_set_thumb_body(&request),
            transport::decode_bool_json_response,
        )
        .await
    }

    /// Send a sticker message (`sendSticker`).
    pub async fn send_sticker(&self, request: SendSticker) -> Result<Message, TelegramError> {
        self.call(
            "sendSticker",
            transport::encode_send_sticker_body(&request),
            transport::decode_message_json_response,
        )
        .await
    }

    /// Send a text message (`sendMessage`).
    pub async fn send_message(&self, request: SendMessage) -> Result<Message, TelegramError> {
        self.call(
            "sendMessage",
            transport::encode_send_message_body(&request),
            transport::decode_message_json_response,
        )
        .await
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.origin, self.token.as_str(), method)
    }

    async fn call<T>(
        &self,
        method: &'static str,
        body: Value,
        decode: fn(&str) -> Result<Reply<T>, TransportError>,
    ) -> Result<T, TelegramError> {
        debug!(method, "calling Telegram Bot API");

        let url = self.method_url(method);
        let response = self
            .http
            .post_json(&url, body)
            .await
            .map_err(TelegramError::Transport)?;

        if !(200..=299).contains(&response.status) {
            // Telegram reports most failures as 4xx with an `ok: false` envelope.
            if let Some(error) = transport::decode_error_envelope(&response.body) {
                return Err(api_error(method, error));
            }
            warn!(method, status = response.status, "unexpected HTTP status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(TelegramError::HttpStatus {
                status: response.status,
                body,
            });
        }

        match decode(&response.body).map_err(|err| TelegramError::Parse(Box::new(err)))? {
            Reply::Ok(value) => Ok(value),
            Reply::Failed(error) => Err(api_error(method, error)),
        }
    }
}

fn api_error(method: &str, error: ErrorResponse) -> TelegramError {
    warn!(
        method,
        error_code = ?error.error_code,
        description = ?error.description,
        "Telegram rejected the request"
    );
    TelegramError::Api {
        error_code: error.error_code,
        description: error.description,
        parameters: error.parameters,
    }
}
