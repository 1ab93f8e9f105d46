/*!
Shared ownership of public key objects.

Keys are handed to several IKE sessions at once. `SharedPublicKey` is an
atomically reference-counted handle: `get_ref` acquires another reference
and `destroy` releases one. The backend object is dropped, and its
fingerprint cache entries purged, when the last reference is released.
*/

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, Weak};

use crate::core::crypto::traits::public_key::PublicKey;

/// Reference-counted public key handle
#[derive(Clone)]
pub struct SharedPublicKey {
    inner: Arc<dyn PublicKey>,
}

impl SharedPublicKey {
    /// Wrap a freshly constructed key, holding the first reference
    pub fn new<K: PublicKey + 'static>(key: K) -> Self {
        Self { inner: Arc::new(key) }
    }

    /// Acquire another reference to the same key
    pub fn get_ref(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Release this reference
    pub fn destroy(self) {
        drop(self);
    }

    /// Number of live references
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Observe the key without keeping it alive
    pub fn downgrade(&self) -> WeakPublicKey {
        WeakPublicKey {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Whether two handles refer to the same key object
    pub fn ptr_eq(&self, other: &SharedPublicKey) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Deref for SharedPublicKey {
    type Target = dyn PublicKey;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl PartialEq for SharedPublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.inner.equals(other.inner.as_ref())
    }
}

impl fmt::Debug for SharedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedPublicKey")
            .field("key", &self.inner)
            .field("refs", &self.ref_count())
            .finish()
    }
}

/// Non-owning observer of a shared key
#[derive(Clone)]
pub struct WeakPublicKey {
    inner: Weak<dyn PublicKey>,
}

impl WeakPublicKey {
    /// Get a new reference if the key is still alive
    pub fn upgrade(&self) -> Option<SharedPublicKey> {
        self.inner.upgrade().map(|inner| SharedPublicKey { inner })
    }

    /// Whether the key has been released by all holders
    pub fn is_released(&self) -> bool {
        self.inner.strong_count() == 0
    }
}

impl fmt::Debug for WeakPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeakPublicKey(released: {})", self.is_released())
    }
}
