use std::sync::Arc;

use corpsite::common::Config;
use corpsite::editor::{Editor, SettingsEditor};
use corpsite::services::{
    BackendClient, Resource, ResourceService, Singleton, SingletonService,
};

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub client: BackendClient,
    pub config: Arc<Config>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn service<R: Resource>(&self) -> ResourceService<R> {
        ResourceService::new(self.client.clone())
    }

    pub fn singleton<S: Singleton>(&self) -> SingletonService<S> {
        SingletonService::new(self.client.clone())
    }

    pub fn editor<R: Resource>(&self) -> Editor<R> {
        Editor::new(self.service())
    }

    pub fn settings_editor<S: Singleton>(&self) -> SettingsEditor<S> {
        SettingsEditor::new(self.singleton())
    }
}
