use std::marker::PhantomData;

use reqwest::Method;

use super::{BackendClient, Singleton, Upload};
use crate::common::ServiceError;

/// Data service for a single settings document.
#[derive(Debug)]
pub struct SingletonService<S> {
    client: BackendClient,
    _document: PhantomData<fn() -> S>,
}

impl<S> Clone for SingletonService<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _document: PhantomData,
        }
    }
}

impl<S: Singleton> SingletonService<S> {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            _document: PhantomData,
        }
    }

    /// A document that was never saved reads as `S::default()`.
    pub async fn get(&self) -> Result<S, ServiceError> {
        Ok(self.client.get(S::ENDPOINT).await?.unwrap_or_default())
    }

    pub async fn save(&self, document: &S, upload: Option<&Upload>) -> Result<Option<S>, ServiceError> {
        match upload.filter(|u| !u.is_empty()) {
            Some(upload) => {
                self.client
                    .send_multipart(Method::PUT, S::ENDPOINT, document, S::UPLOAD_FIELD, upload)
                    .await
            }
            None => self.client.send_json(Method::PUT, S::ENDPOINT, document).await,
        }
    }
}
