use crate::inner::BotApiInner;
use crate::{BotApi, Compression};

/// Environment variable read by [`BotApiBuilder::from_env`] for the bot token.
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable read by [`BotApiBuilder::from_env`] for a custom API domain.
pub const API_DOMAIN_ENV: &str = "TELEGRAM_API_DOMAIN";

/// API Client builder struct.
/// Use `BotApi::from` or `into` to make `BotApi` struct.
#[derive(Clone, Debug)]
pub struct BotApiBuilder {
    inner: BotApiInner,
}

impl BotApiBuilder {
    /// Creates the builder from bot token with default values.
    pub fn new(token: String) -> Self {
        cfg_if::cfg_if! {
            if #[cfg(feature = "compression_gzip")] {
                let compression = Compression::Gzip;
            } else {
                let compression = Compression::None;
            }
        }

        Self {
            inner: BotApiInner {
                compression,
                token,
                domain: "api.telegram.org".to_string(),
            },
        }
    }

    /// Creates the builder from `TELEGRAM_BOT_TOKEN`, using `TELEGRAM_API_DOMAIN` when it is set.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let builder = Self::new(std::env::var(BOT_TOKEN_ENV)?);

        match std::env::var(API_DOMAIN_ENV) {
            Ok(domain) => Ok(builder.with_domain(domain)),
            Err(std::env::VarError::NotPresent) => Ok(builder),
            Err(e) => Err(e),
        }
    }

    /// Pass new bot token to builder
    pub fn with_token(mut self, token: String) -> Self {
        self.inner.token = token;
        self
    }

    /// Pass new API domain to builder. Default is api.telegram.org
    pub fn with_domain(mut self, domain: String) -> Self {
        self.inner.domain = domain;
        self
    }

    /// Pass new compression to builder. Default is Compression::Gzip
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.inner.compression = compression;
        self
    }
}

impl From<BotApiBuilder> for BotApi {
    fn from(builder: BotApiBuilder) -> Self {
        BotApi::from_inner(builder.inner)
    }
}
