use crate::errors::HarmonizeResult;

/// Snapshot-oriented persistence port.
///
/// The contract is deliberately coarse: load the whole snapshot once at
/// startup, rewrite the whole snapshot on every mutation. Implementations
/// must make `save` atomic so a concurrent reader never observes a partial
/// file. Tests substitute an in-memory implementation.
pub trait ISnapshotStore<T>: Send + Sync {
    /// Load the persisted snapshot. `Ok(None)` means nothing was persisted
    /// yet; a corrupt snapshot is an error the caller downgrades to empty.
    fn load(&self) -> HarmonizeResult<Option<T>>;

    /// Atomically replace the persisted snapshot.
    fn save(&self, value: &T) -> HarmonizeResult<()>;
}
