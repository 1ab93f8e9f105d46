/*!
Registry manager for key builders and Diffie-Hellman backends.

Backends register constructors at runtime; lookups try the constructors
registered for a request in registration order and return the first
object produced.
*/

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::core::crypto::algorithms::ec::PublicKeyBuilder;
use crate::core::crypto::algorithms::{dh, ec};
use crate::core::crypto::context::CryptoContext;
use crate::core::crypto::key::SharedPublicKey;
use crate::core::crypto::traits::diffie_hellman::DiffieHellman;
use crate::core::crypto::types::{BuilderPart, DhGroup, KeyType};

/// Creates a builder for a key type, `None` if the backend does not handle it
pub type BuilderConstructor =
    Arc<dyn Fn(KeyType, &CryptoContext) -> Option<PublicKeyBuilder> + Send + Sync>;

/// Creates a DH exchange for a group, `None` if the backend does not handle it
pub type DhConstructor = Arc<dyn Fn(DhGroup) -> Option<Box<dyn DiffieHellman>> + Send + Sync>;

/// Registry of key builders and DH backends
pub struct CryptoRegistry {
    /// Builder constructors with the key type they serve, in registration order
    key_builders: Vec<(String, KeyType, BuilderConstructor)>,

    /// DH constructors in registration order
    diffie_hellman: Vec<(String, DhConstructor)>,
}

impl CryptoRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            key_builders: Vec::new(),
            diffie_hellman: Vec::new(),
        }
    }

    /// Create a registry with the built-in backends
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_key_builder("ec", KeyType::Ecdsa, Arc::new(ec::ec_public_key_builder));
        registry.register_diffie_hellman("ecp", Arc::new(dh::create_diffie_hellman));
        registry
    }

    pub fn register_key_builder(&mut self, name: &str, key_type: KeyType, constructor: BuilderConstructor) {
        self.key_builders.push((name.to_string(), key_type, constructor));
    }

    pub fn register_diffie_hellman(&mut self, name: &str, constructor: DhConstructor) {
        self.diffie_hellman.push((name.to_string(), constructor));
    }

    /// Build a public key of `key_type` from `parts`.
    ///
    /// `KeyType::Any` tries every registered builder. Each builder receives
    /// all parts; the first one that produces a key wins.
    pub fn create_public_key(
        &self,
        context: &CryptoContext,
        key_type: KeyType,
        parts: &[BuilderPart],
    ) -> Option<SharedPublicKey> {
        let candidates = self
            .key_builders
            .iter()
            .filter(|(_, registered, _)| key_type == KeyType::Any || *registered == key_type);

        for (name, registered, constructor) in candidates {
            let Some(mut builder) = constructor(*registered, context) else {
                continue;
            };
            for part in parts {
                builder.add(part.clone());
            }
            if let Some(key) = builder.build() {
                return Some(key);
            }
            debug!("builder '{}' could not build {} key", name, registered);
        }
        None
    }

    /// Create a DH exchange for `group` from the first backend that supports it
    pub fn create_diffie_hellman(&self, group: DhGroup) -> Option<Box<dyn DiffieHellman>> {
        for (name, constructor) in &self.diffie_hellman {
            if let Some(dh) = constructor(group) {
                return Some(dh);
            }
            debug!("DH backend '{}' does not support {}", name, group);
        }
        None
    }

    pub fn list_key_builders(&self) -> Vec<String> {
        self.key_builders.iter().map(|(name, _, _)| name.clone()).collect()
    }

    pub fn list_diffie_hellman(&self) -> Vec<String> {
        self.diffie_hellman.iter().map(|(name, _)| name.clone()).collect()
    }
}

impl Default for CryptoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Global registry instance
static REGISTRY: Lazy<RwLock<CryptoRegistry>> = Lazy::new(|| RwLock::new(CryptoRegistry::with_defaults()));

// Public API

/// Get a read-only reference to the global registry
pub fn get_registry() -> RwLockReadGuard<'static, CryptoRegistry> {
    REGISTRY.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn get_registry_mut() -> RwLockWriteGuard<'static, CryptoRegistry> {
    REGISTRY.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Register a key builder with the global registry
pub fn register_key_builder(name: &str, key_type: KeyType, constructor: BuilderConstructor) {
    get_registry_mut().register_key_builder(name, key_type, constructor);
}

/// Register a DH backend with the global registry
pub fn register_diffie_hellman(name: &str, constructor: DhConstructor) {
    get_registry_mut().register_diffie_hellman(name, constructor);
}

/// Build a public key through the global registry and context
pub fn create_public_key(key_type: KeyType, parts: &[BuilderPart]) -> Option<SharedPublicKey> {
    create_public_key_with(CryptoContext::global(), key_type, parts)
}

/// Build a public key through the global registry with an explicit context
pub fn create_public_key_with(
    context: &CryptoContext,
    key_type: KeyType,
    parts: &[BuilderPart],
) -> Option<SharedPublicKey> {
    get_registry().create_public_key(context, key_type, parts)
}

/// Create a DH exchange through the global registry
pub fn create_diffie_hellman(group: DhGroup) -> Option<Box<dyn DiffieHellman>> {
    get_registry().create_diffie_hellman(group)
}

/// List all registered key builders
pub fn list_key_builders() -> Vec<String> {
    get_registry().list_key_builders()
}

/// List all registered DH backends
pub fn list_diffie_hellman() -> Vec<String> {
    get_registry().list_diffie_hellman()
}
