mod extract;
mod transform;

pub use extract::extract;
pub use transform::transform;

use crate::{
    config::StorageConfig,
    notify::OutboxNotifier,
    storage::FsBlobStore,
};

/// Local stand-ins for object storage and mail delivery.
fn local_services() -> (StorageConfig, FsBlobStore, OutboxNotifier) {
    let storage = StorageConfig::from_env();
    let store = FsBlobStore::new(&storage.root);
    let notifier = OutboxNotifier::new(storage.outbox_dir());
    (storage, store, notifier)
}
