use crate::inner::create_client;
use crate::objects::InputFile;
use crate::RequestError;
use hyper::client::HttpConnector;
use hyper::http::request::Builder;
use hyper::{Client, Response};
use hyper_multipart_rfc7578::client::multipart::*;
use hyper_rustls::HttpsConnector;
use serde_json::{Map, Value};
use std::io::Cursor;

/// # Multipart requests for methods that upload new files
/// Every wire field becomes a text part (JSON-encoded unless it is a plain string),
/// every new [`InputFile`] upload becomes a file part named after its attach name,
/// which the matching field references as `attach://<attach_name>`.
#[derive(Clone, Debug)]
pub(crate) struct Uploader {
    client: Client<HttpsConnector<HttpConnector>, Body>,
}

impl Uploader {
    pub(crate) async fn send(
        &self,
        builder: Builder,
        fields: Map<String, Value>,
        files: &[&InputFile],
    ) -> Result<Response<hyper::Body>, RequestError> {
        let request = form(fields, files)
            .set_body::<Body>(builder)
            .map_err(RequestError::transport)?;

        self.client
            .request(request)
            .await
            .map_err(RequestError::transport)
    }
}

impl Default for Uploader {
    fn default() -> Self {
        Self {
            client: create_client(),
        }
    }
}

pub(crate) fn form(fields: Map<String, Value>, files: &[&InputFile]) -> Form<'static> {
    let mut form = Form::default();

    for (key, value) in fields {
        match value {
            Value::String(text) => form.add_text(key, text),
            other => form.add_text(key, other.to_string()),
        }
    }

    for file in files {
        if let InputFile::Upload {
            attach_name,
            file_name,
            data,
        } = file
        {
            form.add_reader_file(
                attach_name.clone(),
                Cursor::new(data.clone()),
                file_name.clone(),
            );
        }
    }

    form
}
