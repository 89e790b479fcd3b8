//! Auto-sync: keeps the local meetings view in step with the backend.

pub mod observer;
pub mod reconciler;
pub mod snapshot;
pub mod status;

pub use observer::SyncObserver;
pub use reconciler::AutoSync;
pub use snapshot::SyncSnapshot;
pub use status::{SyncStatus, SyncStatusHandle};
