/*!
Traits for hash primitives.

Backends obtain hashers through a factory so the primitive can be absent
and so callers can swap in an instrumented implementation.
*/

use crate::core::crypto::types::HashAlgorithm;

/// A single hashing primitive
pub trait Hasher: Send {
    /// Get the algorithm being used
    fn algorithm(&self) -> HashAlgorithm;

    /// Hash `data` and return the digest
    fn allocate_hash(&mut self, data: &[u8]) -> Vec<u8>;

    /// Digest size in bytes
    fn hash_size(&self) -> usize {
        self.algorithm().output_size()
    }
}

/// Source of hashers
pub trait HasherFactory: Send + Sync {
    /// Create a hasher, `None` if the algorithm is not available
    fn create_hasher(&self, algorithm: HashAlgorithm) -> Option<Box<dyn Hasher>>;
}
