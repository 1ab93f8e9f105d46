/*!
Software hash implementations.
*/

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::core::crypto::traits::hasher::{Hasher, HasherFactory};
use crate::core::crypto::types::HashAlgorithm;

/// Hasher backed by the RustCrypto digest implementations
pub struct SoftwareHasher {
    algorithm: HashAlgorithm,
}

impl SoftwareHasher {
    /// Create a hasher for the given algorithm
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl Hasher for SoftwareHasher {
    fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    fn allocate_hash(&mut self, data: &[u8]) -> Vec<u8> {
        match self.algorithm {
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

/// Factory handing out `SoftwareHasher`s for every algorithm
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftwareHasherFactory;

impl HasherFactory for SoftwareHasherFactory {
    fn create_hasher(&self, algorithm: HashAlgorithm) -> Option<Box<dyn Hasher>> {
        Some(Box::new(SoftwareHasher::new(algorithm)))
    }
}
