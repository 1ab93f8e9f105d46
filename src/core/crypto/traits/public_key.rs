/*!
Traits for public key operations.

`PublicKey` is the capability interface IKE code talks to. Backends
implement the `try_*` methods, which report why an operation did not
succeed; the provided `verify`, `encrypt`, `get_fingerprint` and
`get_encoding` methods keep the boolean contract and turn the reason into
a log line.
*/

use std::fmt::Debug;

use tracing::{debug, warn};

use crate::core::error::KeyError;
use crate::core::crypto::types::{KeyEncodingType, KeyIdentity, KeyType, SignatureScheme};

/// Trait for public key operations
pub trait PublicKey: Send + Sync + Debug {
    /// Get the type of the key
    fn key_type(&self) -> KeyType;

    /// Identity of this key object in the fingerprint cache
    fn identity(&self) -> KeyIdentity;

    /// Verify a signature, reporting why verification failed
    fn try_verify(
        &self,
        scheme: SignatureScheme,
        data: &[u8],
        signature: &[u8],
    ) -> Result<(), KeyError>;

    /// Encrypt data to this key
    fn try_encrypt(&self, plain: &[u8]) -> Result<Vec<u8>, KeyError>;

    /// Size of the key's field elements in bytes
    fn key_size(&self) -> usize;

    /// Compute (or fetch from the cache) a fingerprint of the key
    fn try_fingerprint(&self, kind: KeyEncodingType) -> Result<Vec<u8>, KeyError>;

    /// Encode the key
    fn try_encoding(&self, kind: KeyEncodingType) -> Result<Vec<u8>, KeyError>;

    /// Verify a signature; `true` only if it parses and is valid
    fn verify(&self, scheme: SignatureScheme, data: &[u8], signature: &[u8]) -> bool {
        match self.try_verify(scheme, data, signature) {
            Ok(()) => true,
            Err(err @ KeyError::UnsupportedScheme(_)) => {
                warn!("{}: {}", self.key_type(), err);
                false
            }
            Err(err) => {
                debug!("{} {} verification failed: {}", self.key_type(), scheme, err);
                false
            }
        }
    }

    /// Encrypt data to this key
    fn encrypt(&self, plain: &[u8]) -> Option<Vec<u8>> {
        self.try_encrypt(plain)
            .map_err(|err| warn!("{}", err))
            .ok()
    }

    /// Fingerprint of the key, `None` if it cannot be produced
    fn get_fingerprint(&self, kind: KeyEncodingType) -> Option<Vec<u8>> {
        self.try_fingerprint(kind)
            .map_err(|err| match err {
                KeyError::HasherUnavailable(_) => warn!("{}, fingerprinting failed", err),
                _ => debug!("{} fingerprint failed: {}", kind, err),
            })
            .ok()
    }

    /// Encoding of the key, `None` if the type is not supported
    fn get_encoding(&self, kind: KeyEncodingType) -> Option<Vec<u8>> {
        self.try_encoding(kind)
            .map_err(|err| debug!("{} encoding failed: {}", kind, err))
            .ok()
    }

    /// Compare key material. Two objects wrapping the same key are equal.
    fn equals(&self, other: &dyn PublicKey) -> bool {
        if self.identity() == other.identity() {
            return true;
        }
        if self.key_type() != other.key_type() {
            return false;
        }
        let kind = KeyEncodingType::IdPubkeyInfoSha1;
        match (self.try_fingerprint(kind), other.try_fingerprint(kind)) {
            (Ok(a), Ok(b)) => a == b,
            _ => {
                let kind = KeyEncodingType::PubSpkiAsn1Der;
                match (self.try_encoding(kind), other.try_encoding(kind)) {
                    (Ok(a), Ok(b)) => a == b,
                    _ => false,
                }
            }
        }
    }
}
