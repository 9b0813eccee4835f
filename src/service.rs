use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::flag::Flag;
use crate::store::FlagStore;

/// How to look a flag up: by its unique name or by document id.
#[derive(Clone, Copy, Debug)]
pub enum FlagLookup<'a> {
    ByName(&'a str),
    ById(&'a Uuid),
}

/// All flags owned by `user_id`.
pub async fn get_flags(store: &dyn FlagStore, user_id: &str) -> Vec<Flag> {
    store.flags(user_id).await
}

pub async fn get_flag(store: &dyn FlagStore, lookup: FlagLookup<'_>) -> Option<Flag> {
    match lookup {
        FlagLookup::ByName(name) => store.flag_by_name(name).await,
        FlagLookup::ById(id) => store.flag_by_id(id).await,
    }
}

/// Persist a new flag. Returns false, persisting nothing, when the name is
/// already taken.
pub async fn add_flag(store: &dyn FlagStore, flag: Flag) -> bool {
    if get_flag(store, FlagLookup::ByName(&flag.name)).await.is_some() {
        debug!("flag {} already exists, refusing to add", flag.name);
        return false;
    }

    store.add_flag(flag).await
}

/// Replace the flag bearing `flag.name`. Returns false when no flag with
/// that name exists. The stored document id is kept and `updated_on` is
/// stamped with the current time.
pub async fn update_flag(store: &dyn FlagStore, mut flag: Flag) -> bool {
    match get_flag(store, FlagLookup::ByName(&flag.name)).await {
        Some(existing) => {
            flag.updated_on = Utc::now();
            store.update_flag(&existing.id, flag).await
        }
        None => false,
    }
}
