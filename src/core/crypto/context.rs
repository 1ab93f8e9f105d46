/*!
Crypto context shared by key objects.

A context bundles the fingerprint cache and the hasher factory a backend
needs. Keys hold a clone of the context they were built with, so a cache
is never reached through hidden global state; `CryptoContext::global()`
only provides a default instance for callers that do not manage one.
*/

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::core::crypto::algorithms::hash::SoftwareHasherFactory;
use crate::core::crypto::config::CryptoConfig;
use crate::core::crypto::fingerprint::FingerprintCache;
use crate::core::crypto::traits::hasher::{Hasher, HasherFactory};
use crate::core::crypto::types::HashAlgorithm;

/// Shared services of the key backends
#[derive(Clone)]
pub struct CryptoContext {
    cache: Arc<FingerprintCache>,
    hashers: Arc<dyn HasherFactory>,
}

impl CryptoContext {
    /// Create a context from a configuration, using the software hashers
    pub fn new(config: &CryptoConfig) -> Self {
        Self {
            cache: Arc::new(FingerprintCache::new(config.fingerprint_cache_capacity)),
            hashers: Arc::new(SoftwareHasherFactory),
        }
    }

    /// Replace the hasher factory
    pub fn with_hasher_factory(mut self, hashers: Arc<dyn HasherFactory>) -> Self {
        self.hashers = hashers;
        self
    }

    /// Replace the fingerprint cache
    pub fn with_cache(mut self, cache: Arc<FingerprintCache>) -> Self {
        self.cache = cache;
        self
    }

    /// The process-wide default context
    pub fn global() -> &'static CryptoContext {
        &GLOBAL_CONTEXT
    }

    /// The fingerprint cache of this context
    pub fn cache(&self) -> &Arc<FingerprintCache> {
        &self.cache
    }

    /// Create a hasher from the context's factory
    pub fn create_hasher(&self, algorithm: HashAlgorithm) -> Option<Box<dyn Hasher>> {
        self.hashers.create_hasher(algorithm)
    }
}

impl Default for CryptoContext {
    fn default() -> Self {
        Self::new(&CryptoConfig::default())
    }
}

impl fmt::Debug for CryptoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoContext")
            .field("cached_fingerprints", &self.cache.len())
            .field("cache_capacity", &self.cache.capacity())
            .finish()
    }
}

static GLOBAL_CONTEXT: Lazy<CryptoContext> = Lazy::new(CryptoContext::default);
