use crate::botapi::Compression;
use crate::RequestError;
use hyper::client::HttpConnector;
use hyper::header::{HeaderValue, ACCEPT, ACCEPT_ENCODING};
use hyper::http::request::Builder;
use hyper::{Client, Method, Request};
use hyper_rustls::HttpsConnector;
use std::fmt::{Debug, Formatter};
use std::io::Read;

#[derive(Clone)]
pub(crate) struct BotApiInner {
    pub(crate) compression: Compression,
    pub(crate) token: String,
    pub(crate) domain: String,
}

impl BotApiInner {
    pub(crate) fn url(&self, path: &str) -> String {
        format!("https://{}/bot{}/{}", self.domain, self.token, path)
    }
}

impl Debug for BotApiInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotApiInner")
            .field("compression", &self.compression)
            .field("token", &"<redacted>")
            .field("domain", &self.domain)
            .finish()
    }
}

impl From<&'_ BotApiInner> for Builder {
    fn from(inner: &BotApiInner) -> Self {
        Request::builder()
            .method(Method::POST)
            .header(
                ACCEPT_ENCODING,
                match inner.compression {
                    #[cfg(feature = "compression_gzip")]
                    Compression::Gzip => "gzip",
                    Compression::None => "identity",
                },
            )
            .header(ACCEPT, "application/json")
    }
}

pub(crate) fn create_client<B>() -> Client<HttpsConnector<HttpConnector>, B>
where
    B: hyper::body::HttpBody + Send + 'static,
    B::Data: Send,
{
    let https = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .https_only()
        .enable_http1()
        .enable_http2()
        .build();

    Client::builder().build(https)
}

pub(crate) fn uncompress<B: Read + 'static>(
    encoding: Option<&HeaderValue>,
    body: B,
) -> Box<dyn Read> {
    match encoding {
        #[cfg(feature = "compression_gzip")]
        Some(v) if v == "gzip" => Box::new(flate2::read::GzDecoder::new(body)),
        _ => Box::new(body),
    }
}

pub(crate) fn read_body<B: Read + 'static>(
    encoding: Option<&HeaderValue>,
    body: B,
) -> Result<String, RequestError> {
    let mut raw = String::new();
    uncompress(encoding, body).read_to_string(&mut raw)?;
    Ok(raw)
}
