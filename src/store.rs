use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::flag::Flag;

/// FlagStore is the persistence contract for flag documents.
///
/// Reads and writes are single-document and atomic; durability, indexing,
/// and everything else is the backend's business. Documents are returned by
/// value, the way a document database hands back decoded records.
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Retrieve the flag named `name`.
    async fn flag_by_name(&self, name: &str) -> Option<Flag>;

    /// Retrieve the flag with id `id`.
    async fn flag_by_id(&self, id: &Uuid) -> Option<Flag>;

    /// All flags owned by `user_id`.
    async fn flags(&self, user_id: &str) -> Vec<Flag>;

    /// Persist a new flag document. Returns false if a document with the
    /// same id already exists.
    async fn add_flag(&self, flag: Flag) -> bool;

    /// Replace the document with id `id`. Returns false if no such document
    /// exists. The stored id wins over whatever id the replacement carries.
    async fn update_flag(&self, id: &Uuid, flag: Flag) -> bool;
}

/// In-memory [FlagStore] holding flag documents in a map keyed by id.
#[derive(Default)]
pub struct MemoryFlagStore {
    flags: RwLock<HashMap<Uuid, Flag>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlagStore for MemoryFlagStore {
    async fn flag_by_name(&self, name: &str) -> Option<Flag> {
        self.flags
            .read()
            .await
            .values()
            .find(|flag| flag.name == name)
            .cloned()
    }

    async fn flag_by_id(&self, id: &Uuid) -> Option<Flag> {
        self.flags.read().await.get(id).cloned()
    }

    async fn flags(&self, user_id: &str) -> Vec<Flag> {
        let mut flags: Vec<Flag> = self
            .flags
            .read()
            .await
            .values()
            .filter(|flag| flag.user_id == user_id)
            .cloned()
            .collect();
        // map iteration order is arbitrary; keep the listing stable
        flags.sort_by(|a, b| a.created_on.cmp(&b.created_on));
        flags
    }

    async fn add_flag(&self, flag: Flag) -> bool {
        let mut flags = self.flags.write().await;
        if flags.contains_key(&flag.id) {
            return false;
        }
        flags.insert(flag.id, flag);
        true
    }

    async fn update_flag(&self, id: &Uuid, mut flag: Flag) -> bool {
        let mut flags = self.flags.write().await;
        match flags.get_mut(id) {
            Some(stored) => {
                flag.id = *id;
                *stored = flag;
                true
            }
            None => false,
        }
    }
}
