use crate::config::Config;
use crate::error::QpResult;
use crate::profile::repo::ProfileRepo;
use crate::profile::Profile;
use crate::qr::{self, QrEncoder};
use crate::store::MemoryStore;
use crate::{ProfileId, System};

use std::sync::Arc;
use time::OffsetDateTime;

/// Application context: everything a request may depend on, constructed
/// once at startup and shared by every handler.
#[derive(Clone)]
pub struct App {
    pub config: Arc<Config>,
    pub store: MemoryStore,
}

impl App {
    pub fn new(config: Config, store: MemoryStore) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

impl System for App {
    fn get_current_time(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn new_profile_id(&self) -> ProfileId {
        ProfileId(uuid::Uuid::new_v4())
    }
}

impl ProfileRepo for App {
    async fn insert_profile(&self, profile: Profile) -> QpResult<()> {
        self.store.insert_profile(profile).await
    }

    async fn find_profile(&self, id: ProfileId) -> QpResult<Option<Profile>> {
        self.store.find_profile(id).await
    }
}

impl QrEncoder for App {
    async fn encode_data_url(&self, content: String) -> QpResult<String> {
        qr::render_bounded(self.config.code_timeout(), move || {
            qr::render_png_data_url(&content)
        })
        .await
    }
}
