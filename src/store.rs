use crate::error::QpResult;
use crate::profile::repo::ProfileRepo;
use crate::profile::Profile;
use crate::ProfileId;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-lifetime profile storage. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    profiles: Arc<RwLock<HashMap<ProfileId, Profile>>>,
}

impl MemoryStore {
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }
}

impl ProfileRepo for MemoryStore {
    async fn insert_profile(&self, profile: Profile) -> QpResult<()> {
        match self.profiles.write().await.entry(profile.id) {
            Entry::Occupied(entry) => {
                Err(anyhow::anyhow!("profile id {} is already taken", entry.key()).into())
            }
            Entry::Vacant(entry) => {
                entry.insert(profile);
                Ok(())
            }
        }
    }

    async fn find_profile(&self, id: ProfileId) -> QpResult<Option<Profile>> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }
}
