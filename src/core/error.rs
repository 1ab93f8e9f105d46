/*!
Error handling for the public key layer.

Public key operations keep a boolean contract towards IKE code; the error
types here are the explicit diagnostic channel behind those booleans.
They never carry key material or signature bytes.
*/

use thiserror::Error;

use crate::core::crypto::types::{DhGroup, HashAlgorithm, KeyEncodingType, KeyType, SignatureScheme};

/// Result type for the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
#[derive(Error, Debug)]
pub enum Error {
    /// Public key failure
    #[error("Public key operation failed: {0}")]
    Key(#[from] KeyError),

    /// Diffie-Hellman failure
    #[error("Diffie-Hellman operation failed: {0}")]
    DiffieHellman(#[from] DhError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Reasons a public key operation did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The signature scheme is not handled by this key type
    #[error("signature scheme {0} not supported")]
    UnsupportedScheme(SignatureScheme),

    /// The requested encoding or fingerprint type is not available
    #[error("encoding {0} not supported")]
    UnsupportedEncoding(KeyEncodingType),

    /// The key type does not provide the operation at all
    #[error("{operation} not supported for {key_type} keys")]
    UnsupportedOperation {
        operation: &'static str,
        key_type: KeyType,
    },

    /// The signature could not be decoded
    #[error("invalid signature encoding")]
    InvalidSignatureFormat,

    /// The key blob did not decode into a supported public key
    #[error("invalid key encoding")]
    InvalidKeyFormat,

    /// The hash primitive is not available from the hasher factory
    #[error("{0} hash algorithm not available")]
    HasherUnavailable(HashAlgorithm),

    /// The signature parsed but did not verify
    #[error("signature verification failed")]
    VerificationFailed,

    /// The encoder of the backend failed
    #[error("key encoding failed")]
    EncodingFailed,
}

/// Diffie-Hellman errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DhError {
    /// The backend does not implement the group
    #[error("Diffie-Hellman group {0} not supported")]
    UnsupportedGroup(DhGroup),

    /// The peer's public value is malformed
    #[error("invalid Diffie-Hellman public value")]
    InvalidPublicValue,

    /// The shared secret was requested before the peer value was set
    #[error("peer public value not set")]
    PeerValueMissing,

    /// The shared secret cannot be exported by this backend
    #[error("shared secret not available")]
    SecretUnavailable,

    /// The external key manager rejected a request
    #[error("key manager request {request} failed: {reason}")]
    KeyManager {
        request: &'static str,
        reason: String,
    },
}

impl DhError {
    /// Create a key manager error for the named request
    pub fn key_manager(request: &'static str, reason: impl Into<String>) -> Self {
        DhError::KeyManager {
            request,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Key(KeyError::UnsupportedScheme(SignatureScheme::RsaEmsaPkcs1Sha1));
        assert_eq!(
            format!("{}", err),
            "Public key operation failed: signature scheme RSA_EMSA_PKCS1_SHA1 not supported"
        );

        let err = KeyError::UnsupportedOperation {
            operation: "encryption",
            key_type: KeyType::Ecdsa,
        };
        assert_eq!(format!("{}", err), "encryption not supported for ECDSA keys");

        let err = DhError::UnsupportedGroup(DhGroup::Modp2048);
        assert_eq!(format!("{}", err), "Diffie-Hellman group MODP_2048 not supported");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = DhError::key_manager("dh_create", "no context").into();
        match err {
            Error::DiffieHellman(DhError::KeyManager { request, reason }) => {
                assert_eq!(request, "dh_create");
                assert_eq!(reason, "no context");
            }
            _ => panic!("Expected DiffieHellman error"),
        }
    }
}
