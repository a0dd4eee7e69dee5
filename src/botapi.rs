use crate::error::{BotApiResult, RequestError};
use crate::inner::{create_client, read_body, BotApiInner};
use crate::method::{AnyMethod, BotApiMethod, ResultValue};
use crate::objects::InputFile;
use crate::validation::Validate;
use hyper::body::Buf;
use hyper::client::HttpConnector;
use hyper::header::{CONTENT_ENCODING, CONTENT_TYPE};
use hyper::http::request::Builder;
use hyper::{Body, Client, Response};
use hyper_rustls::HttpsConnector;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// # Telegram Bot API client
/// Validates methods locally, sends them as JSON (or multipart/form-data when new files are
/// uploaded) and interprets the responses. Does not retry failed requests.
///
/// ## Usage
/// ```rust,no_run
/// use tgmeta::{BotApi, BotApiBuilder, SetChatTitle};
///
/// let client: BotApi = BotApiBuilder::new("123:ABC".to_string()).into();
///
/// async {
///     let changed = client
///         .execute(&SetChatTitle::default().with_numeric_chat_id(-100123).with_title("Rust"))
///         .await
///         .expect("bot api error");
/// };
/// ```
#[derive(Debug, Clone)]
pub struct BotApi {
    inner: Arc<BotApiInner>,
    client: Client<HttpsConnector<HttpConnector>, Body>,
    #[cfg(feature = "uploader")]
    uploader: crate::upload::Uploader,
}

impl BotApi {
    pub(crate) fn from_inner(inner: BotApiInner) -> Self {
        Self {
            inner: Arc::new(inner),
            client: create_client(),
            #[cfg(feature = "uploader")]
            uploader: Default::default(),
        }
    }

    /// Validate, send and interpret any typed method.
    pub async fn execute<M: BotApiMethod>(&self, method: &M) -> BotApiResult<M::Response> {
        method.validate()?;
        let fields = method.wire_fields()?;
        let raw = self
            .submit(method.path(), fields, &method.attachments())
            .await?;

        Ok(method.deserialize_response(&raw)?)
    }

    /// Same as `execute`, for a method picked at runtime.
    pub async fn execute_any(&self, method: &AnyMethod) -> BotApiResult<ResultValue> {
        method.validate()?;
        let fields = method.wire_fields()?;
        let raw = self
            .submit(method.path(), fields, &method.attachments())
            .await?;

        Ok(method.deserialize_response(&raw)?)
    }

    /// Send wire fields to the given method path and return the raw response body.
    /// No validation happens here.
    pub async fn submit(
        &self,
        path: &str,
        fields: Map<String, Value>,
        files: &[&InputFile],
    ) -> Result<String, RequestError> {
        let builder = Builder::from(self.inner.as_ref()).uri(self.inner.url(path));
        let uploads = files.iter().filter(|file| file.is_upload()).count();

        debug!(path, uploads, "sending bot api request");

        let response = if uploads == 0 {
            let body = serde_json::to_vec(&fields).map_err(RequestError::Serialize)?;
            let request = builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .map_err(RequestError::transport)?;

            self.client
                .request(request)
                .await
                .map_err(RequestError::transport)?
        } else {
            self.upload(builder, fields, files).await?
        };

        let (parts, body) = response.into_parts();
        let body = hyper::body::to_bytes(body)
            .await
            .map_err(RequestError::transport)?;

        debug!(
            path,
            status = parts.status.as_u16(),
            len = body.len(),
            "bot api responded"
        );

        read_body(parts.headers.get(CONTENT_ENCODING), body.reader())
    }

    #[cfg(feature = "uploader")]
    async fn upload(
        &self,
        builder: Builder,
        fields: Map<String, Value>,
        files: &[&InputFile],
    ) -> Result<Response<Body>, RequestError> {
        self.uploader.send(builder, fields, files).await
    }

    #[cfg(not(feature = "uploader"))]
    async fn upload(
        &self,
        _builder: Builder,
        _fields: Map<String, Value>,
        _files: &[&InputFile],
    ) -> Result<Response<Body>, RequestError> {
        Err(RequestError::transport(
            "uploading new files requires the `uploader` feature",
        ))
    }
}

/// Compression of response bodies the client asks for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Compression {
    #[cfg(feature = "compression_gzip")]
    Gzip,
    None,
}
