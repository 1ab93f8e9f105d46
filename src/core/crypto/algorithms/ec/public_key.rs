/*!
ECDSA public key backed by the RustCrypto NIST curve implementations.

Verification follows RFC 4754 for the explicit hash-size schemes
(signature `r || s`, each half as wide as a field element) and the
legacy SHA-1 scheme with a DER `ECDSA-Sig-Value`.
*/

use std::borrow::Cow;
use std::fmt;

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::{DecodePublicKey, EncodePublicKey};
use p256::ecdsa::signature::hazmat::PrehashVerifier;
use tracing::debug;

use crate::core::constants::sizes;
use crate::core::crypto::codec;
use crate::core::crypto::context::CryptoContext;
use crate::core::crypto::traits::public_key::PublicKey;
use crate::core::crypto::types::{
    HashAlgorithm, KeyEncodingType, KeyIdentity, KeyType, SignatureScheme,
};
use crate::core::error::KeyError;

/// Hash used for key fingerprints
pub const FINGERPRINT_HASH: HashAlgorithm = HashAlgorithm::Sha1;

/// How a scheme's signature bytes are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureEncoding {
    /// DER `ECDSA-Sig-Value`, leading zero bytes stripped first
    Der,
    /// Fixed-width `r || s`
    Concatenated,
}

/// Hash and signature encoding for an ECDSA scheme.
///
/// Returns `None` for schemes an EC key cannot verify. A hash of `None`
/// means the data is already a digest.
pub fn scheme_params(
    scheme: SignatureScheme,
) -> Option<(Option<HashAlgorithm>, SignatureEncoding)> {
    match scheme {
        SignatureScheme::EcdsaWithNull => Some((None, SignatureEncoding::Concatenated)),
        SignatureScheme::EcdsaWithSha1Der => {
            Some((Some(HashAlgorithm::Sha1), SignatureEncoding::Der))
        }
        SignatureScheme::Ecdsa256 => {
            Some((Some(HashAlgorithm::Sha256), SignatureEncoding::Concatenated))
        }
        SignatureScheme::Ecdsa384 => {
            Some((Some(HashAlgorithm::Sha384), SignatureEncoding::Concatenated))
        }
        SignatureScheme::Ecdsa521 => {
            Some((Some(HashAlgorithm::Sha512), SignatureEncoding::Concatenated))
        }
        SignatureScheme::RsaEmsaPkcs1Null
        | SignatureScheme::RsaEmsaPkcs1Sha1
        | SignatureScheme::RsaEmsaPkcs1Sha256 => None,
    }
}

/// Curve specific key material
#[derive(Clone, PartialEq, Eq)]
enum CurveKey {
    P256(p256::PublicKey),
    P384(p384::PublicKey),
}

impl CurveKey {
    fn from_spki_der(blob: &[u8]) -> Option<Self> {
        if let Ok(key) = p256::PublicKey::from_public_key_der(blob) {
            return Some(CurveKey::P256(key));
        }
        if let Ok(key) = p384::PublicKey::from_public_key_der(blob) {
            return Some(CurveKey::P384(key));
        }
        None
    }

    fn curve_name(&self) -> &'static str {
        match self {
            CurveKey::P256(_) => "P-256",
            CurveKey::P384(_) => "P-384",
        }
    }

    fn field_size(&self) -> usize {
        match self {
            CurveKey::P256(_) => sizes::p256::FIELD_BYTES,
            CurveKey::P384(_) => sizes::p384::FIELD_BYTES,
        }
    }

    fn spki_der(&self) -> Result<Vec<u8>, KeyError> {
        let der = match self {
            CurveKey::P256(key) => key.to_public_key_der(),
            CurveKey::P384(key) => key.to_public_key_der(),
        };
        der.map(|doc| doc.as_bytes().to_vec())
            .map_err(|_| KeyError::EncodingFailed)
    }

    fn sec1_point(&self) -> Vec<u8> {
        match self {
            CurveKey::P256(key) => key.to_encoded_point(false).as_bytes().to_vec(),
            CurveKey::P384(key) => key.to_encoded_point(false).as_bytes().to_vec(),
        }
    }

    fn verify_prehash(
        &self,
        prehash: &[u8],
        encoding: SignatureEncoding,
        signature: &[u8],
    ) -> Result<(), KeyError> {
        match self {
            CurveKey::P256(key) => {
                let signature = match encoding {
                    SignatureEncoding::Der => p256::ecdsa::Signature::from_der(signature),
                    SignatureEncoding::Concatenated => p256::ecdsa::Signature::from_slice(signature),
                }
                .map_err(|_| KeyError::InvalidSignatureFormat)?;
                p256::ecdsa::VerifyingKey::from(key)
                    .verify_prehash(prehash, &signature)
                    .map_err(|_| KeyError::VerificationFailed)
            }
            CurveKey::P384(key) => {
                let signature = match encoding {
                    SignatureEncoding::Der => p384::ecdsa::Signature::from_der(signature),
                    SignatureEncoding::Concatenated => p384::ecdsa::Signature::from_slice(signature),
                }
                .map_err(|_| KeyError::InvalidSignatureFormat)?;
                p384::ecdsa::VerifyingKey::from(key)
                    .verify_prehash(prehash, &signature)
                    .map_err(|_| KeyError::VerificationFailed)
            }
        }
    }
}

/// ECDSA public key
pub struct EcPublicKey {
    key: CurveKey,
    identity: KeyIdentity,
    context: CryptoContext,
}

impl EcPublicKey {
    /// Load a key from a DER encoded SubjectPublicKeyInfo
    pub fn load(blob: &[u8], context: &CryptoContext) -> Result<Self, KeyError> {
        let key = CurveKey::from_spki_der(blob).ok_or(KeyError::InvalidKeyFormat)?;
        Ok(Self {
            key,
            identity: KeyIdentity::next(),
            context: context.clone(),
        })
    }

    /// Name of the key's curve
    pub fn curve_name(&self) -> &'static str {
        self.key.curve_name()
    }

    fn fingerprint_input(&self, kind: KeyEncodingType) -> Result<Vec<u8>, KeyError> {
        match kind {
            KeyEncodingType::IdPubkeySha1 => Ok(self.key.sec1_point()),
            KeyEncodingType::IdPubkeyInfoSha1 => self.key.spki_der(),
            other => Err(KeyError::UnsupportedEncoding(other)),
        }
    }
}

impl PublicKey for EcPublicKey {
    fn key_type(&self) -> KeyType {
        KeyType::Ecdsa
    }

    fn identity(&self) -> KeyIdentity {
        self.identity
    }

    fn try_verify(
        &self,
        scheme: SignatureScheme,
        data: &[u8],
        signature: &[u8],
    ) -> Result<(), KeyError> {
        let (hash, encoding) = scheme_params(scheme).ok_or(KeyError::UnsupportedScheme(scheme))?;
        let field_size = self.key.field_size();

        let signature: Cow<'_, [u8]> = match encoding {
            SignatureEncoding::Der => Cow::Borrowed(codec::strip_leading_zeros(signature)),
            SignatureEncoding::Concatenated => {
                let (r, s) = codec::split_concatenated(signature, field_size)
                    .ok_or(KeyError::InvalidSignatureFormat)?;
                Cow::Owned([r, s].concat())
            }
        };

        let digest: Cow<'_, [u8]> = match hash {
            None => Cow::Borrowed(data),
            Some(algorithm) => {
                let mut hasher = self
                    .context
                    .create_hasher(algorithm)
                    .ok_or(KeyError::HasherUnavailable(algorithm))?;
                Cow::Owned(hasher.allocate_hash(data))
            }
        };

        // ECDSA takes the digest as a big-endian integer; a digest narrower
        // than the field (SHA-1 on P-384) is zero-extended to its width.
        let digest = match codec::left_pad(&digest, field_size) {
            Some(padded) if digest.len() < field_size => Cow::Owned(padded),
            _ => digest,
        };

        self.key.verify_prehash(&digest, encoding, &signature)
    }

    fn try_encrypt(&self, _plain: &[u8]) -> Result<Vec<u8>, KeyError> {
        Err(KeyError::UnsupportedOperation {
            operation: "EC public key encryption",
            key_type: KeyType::Ecdsa,
        })
    }

    fn key_size(&self) -> usize {
        self.key.field_size()
    }

    fn try_fingerprint(&self, kind: KeyEncodingType) -> Result<Vec<u8>, KeyError> {
        let cache = self.context.cache();
        if let Some(fingerprint) = cache.lookup(self.identity, kind) {
            return Ok(fingerprint);
        }

        let encoded = self.fingerprint_input(kind)?;
        let mut hasher = self
            .context
            .create_hasher(FINGERPRINT_HASH)
            .ok_or(KeyError::HasherUnavailable(FINGERPRINT_HASH))?;
        let fingerprint = hasher.allocate_hash(&encoded);
        cache.insert(self.identity, kind, fingerprint.clone());
        Ok(fingerprint)
    }

    fn try_encoding(&self, kind: KeyEncodingType) -> Result<Vec<u8>, KeyError> {
        match kind {
            KeyEncodingType::PubSpkiAsn1Der => self.key.spki_der(),
            other => Err(KeyError::UnsupportedEncoding(other)),
        }
    }

    fn equals(&self, other: &dyn PublicKey) -> bool {
        if other.key_type() != KeyType::Ecdsa {
            return false;
        }
        match other.try_encoding(KeyEncodingType::PubSpkiAsn1Der) {
            Ok(encoding) => self.key.spki_der().is_ok_and(|own| own == encoding),
            Err(_) => false,
        }
    }
}

impl Drop for EcPublicKey {
    fn drop(&mut self) {
        let purged = self.context.cache().purge(self.identity);
        debug!("destroyed {} key {} ({} cached fingerprints)", self.curve_name(), self.identity, purged);
    }
}

impl fmt::Debug for EcPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcPublicKey")
            .field("curve", &self.curve_name())
            .field("identity", &self.identity)
            .finish()
    }
}
