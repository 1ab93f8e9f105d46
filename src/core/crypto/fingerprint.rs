/*!
Fingerprint cache.

Maps `(key identity, encoding type)` to a previously computed digest so
repeated fingerprint requests for the same key do not hash again. The
cache only observes identities; key objects purge their own entries when
they are destroyed.
*/

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::trace;

use crate::core::crypto::types::{KeyEncodingType, KeyIdentity};

/// Default number of cached fingerprints
pub const DEFAULT_CAPACITY: usize = 1024;

/// Fingerprint types a single key can cache (`IdPubkeySha1` and `IdPubkeyInfoSha1`)
pub const FINGERPRINTS_PER_KEY: usize = 2;

/// Thread-safe fingerprint cache.
///
/// The cache never evicts. Once `capacity` entries are held, fingerprints
/// of further keys are recomputed on every request until a cached key is
/// destroyed. Size the capacity for the peak number of live keys times
/// [`FINGERPRINTS_PER_KEY`]; the default of [`DEFAULT_CAPACITY`] covers
/// 512 keys.
#[derive(Debug)]
pub struct FingerprintCache {
    entries: RwLock<HashMap<(KeyIdentity, KeyEncodingType), Vec<u8>>>,
    capacity: usize,
}

impl Default for FingerprintCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl FingerprintCache {
    /// Create a cache holding at most `capacity` digests
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // A panic while holding the lock cannot leave a half-written entry
    // behind, so poisoned locks are recovered.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<(KeyIdentity, KeyEncodingType), Vec<u8>>> {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<(KeyIdentity, KeyEncodingType), Vec<u8>>> {
        self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Look up a cached fingerprint
    pub fn lookup(&self, identity: KeyIdentity, kind: KeyEncodingType) -> Option<Vec<u8>> {
        self.read().get(&(identity, kind)).cloned()
    }

    /// Store a fingerprint. Returns `false` if the cache is full.
    pub fn insert(&self, identity: KeyIdentity, kind: KeyEncodingType, digest: Vec<u8>) -> bool {
        let mut entries = self.write();
        if !entries.contains_key(&(identity, kind)) && entries.len() >= self.capacity {
            trace!("fingerprint cache full, not caching {} of {}", kind, identity);
            return false;
        }
        entries.insert((identity, kind), digest);
        trace!("cached {} fingerprint of {}", kind, identity);
        true
    }

    /// Remove all entries of a key. Returns the number of removed entries.
    pub fn purge(&self, identity: KeyIdentity) -> usize {
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|(id, _), _| *id != identity);
        let removed = before - entries.len();
        if removed > 0 {
            trace!("purged {} cached fingerprints of {}", removed, identity);
        }
        removed
    }

    /// Number of cached fingerprints
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Number of cached fingerprints of one key
    pub fn count_for(&self, identity: KeyIdentity) -> usize {
        self.read().keys().filter(|(id, _)| *id == identity).count()
    }
}
