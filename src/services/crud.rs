use std::marker::PhantomData;

use reqwest::Method;

use super::{BackendClient, Resource, Upload};
use crate::common::ServiceError;

/// Stateless data service for one collection endpoint.
#[derive(Debug)]
pub struct ResourceService<R> {
    client: BackendClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    pub async fn list(&self) -> Result<Vec<R>, ServiceError> {
        Ok(self.client.get(R::ENDPOINT).await?.unwrap_or_default())
    }

    pub async fn get(&self, id: &str) -> Result<R, ServiceError> {
        self.client
            .get(&item_path::<R>(id)?)
            .await?
            .ok_or_else(|| ServiceError::Backend("Không tìm thấy dữ liệu.".to_string()))
    }

    /// Returns the stored record when the backend echoes it back.
    pub async fn create(&self, item: &R, upload: Option<&Upload>) -> Result<Option<R>, ServiceError> {
        self.send(Method::POST, R::ENDPOINT, item, upload).await
    }

    pub async fn update(&self, id: &str, item: &R, upload: Option<&Upload>) -> Result<Option<R>, ServiceError> {
        self.send(Method::PUT, &item_path::<R>(id)?, item, upload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.client.delete(&item_path::<R>(id)?).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        item: &R,
        upload: Option<&Upload>,
    ) -> Result<Option<R>, ServiceError> {
        match upload.filter(|u| !u.is_empty()) {
            Some(upload) => {
                self.client
                    .send_multipart(method, path, item, R::UPLOAD_FIELD, upload)
                    .await
            }
            None => self.client.send_json(method, path, item).await,
        }
    }
}

fn item_path<R: Resource>(id: &str) -> Result<String, ServiceError> {
    let id = id.trim();
    if id.is_empty() || id.contains(['/', '?', '#', '%']) {
        return Err(ServiceError::InvalidRequest("Mã định danh không hợp lệ.".to_string()));
    }
    Ok(format!("{}/{}", R::ENDPOINT, id))
}
