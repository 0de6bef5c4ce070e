use std::sync::Arc;

use storage::{RestStoreConfig, Storage};
use url::Url;

use crate::Clock;
use crate::error::AppServicesError;
use crate::loader::QuestionLoader;
use crate::share_service::ShareService;

/// Assembles app-facing services around one store handle.
///
/// The store is opened once and handed to every service that needs it.
#[derive(Clone)]
pub struct AppServices {
    loader: Arc<QuestionLoader>,
    share_service: Arc<ShareService>,
}

impl AppServices {
    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, share_base: Url) -> Self {
        let loader = Arc::new(QuestionLoader::new(Arc::clone(&storage.shares)));
        let share_service = Arc::new(ShareService::new(
            clock,
            Arc::clone(&storage.shares),
            share_base,
        ));
        Self {
            loader,
            share_service,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the share
    /// base URL is invalid.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        share_base: &str,
    ) -> Result<Self, AppServicesError> {
        let share_base = Url::parse(share_base)?;
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, share_base))
    }

    /// Build services backed by the hosted share table.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::ShareBaseUrl` if the share base URL is invalid.
    pub fn new_remote(
        config: RestStoreConfig,
        clock: Clock,
        share_base: &str,
    ) -> Result<Self, AppServicesError> {
        let share_base = Url::parse(share_base)?;
        Ok(Self::from_storage(&Storage::remote(config), clock, share_base))
    }

    #[must_use]
    pub fn in_memory(clock: Clock, share_base: Url) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, share_base)
    }

    #[must_use]
    pub fn loader(&self) -> Arc<QuestionLoader> {
        Arc::clone(&self.loader)
    }

    #[must_use]
    pub fn share_service(&self) -> Arc<ShareService> {
        Arc::clone(&self.share_service)
    }
}
