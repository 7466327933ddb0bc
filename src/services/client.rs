use reqwest::multipart::{Form, Part};
use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{Envelope, Upload, dedupe_ids, form_parts};
use crate::common::{Config, ConfigError, ServiceError, normalize_backend_domain};

/// Thin HTTP wrapper around the content backend.
///
/// Every call returns the envelope's `data` on success; transport failures,
/// `success: false` and malformed bodies all surface as `ServiceError`.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: normalize_backend_domain(&config.backend_domain)?,
        })
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Self::new(&Config {
            backend_domain: base_url.to_string(),
            ..Config::default()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ServiceError> {
        log::debug!("GET {path}");
        let response = self.http.get(self.url(path)).send().await?;
        read_envelope(response, path).await
    }

    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<Option<T>, ServiceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("{method} {path} (json)");
        let response = self
            .http
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        read_envelope(response, path).await
    }

    /// Sends `body` as text parts plus the file under `file_field`.
    pub async fn send_multipart<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        file_field: &str,
        upload: &Upload,
    ) -> Result<Option<T>, ServiceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("{method} {path} (multipart, {} bytes)", upload.bytes.len());

        let mut form = Form::new();
        for (name, value) in form_parts(body)? {
            form = form.text(name, value);
        }

        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)?;
        form = form.part(file_field.to_string(), part);

        let response = self
            .http
            .request(method, self.url(path))
            .multipart(form)
            .send()
            .await?;
        read_envelope(response, path).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ServiceError> {
        log::debug!("DELETE {path}");
        let response = self.http.delete(self.url(path)).send().await?;
        read_envelope::<Value>(response, path).await.map(|_| ())
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response, path: &str) -> Result<Option<T>, ServiceError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    let envelope = match serde_json::from_slice::<Envelope<Value>>(&bytes) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            log::warn!("{path} returned {status} without an envelope");
            return Err(ServiceError::Backend(format!(
                "Yêu cầu thất bại (mã lỗi {}).",
                status.as_u16()
            )));
        }
        Err(source) => {
            return Err(ServiceError::Decode {
                endpoint: path.to_string(),
                source,
            });
        }
    };

    // A 4xx/5xx that still claims success is treated as a failure.
    let envelope = if envelope.success && !status.is_success() {
        Envelope {
            success: false,
            ..envelope
        }
    } else {
        envelope
    };

    match envelope.into_result() {
        Ok(Some(Value::Null)) | Ok(None) => Ok(None),
        Ok(Some(mut data)) => {
            dedupe_ids(&mut data);
            serde_json::from_value(data)
                .map(Some)
                .map_err(|source| ServiceError::Decode {
                    endpoint: path.to_string(),
                    source,
                })
        }
        Err(err) => {
            log::warn!("{path} rejected the request: {err}");
            Err(err)
        }
    }
}
