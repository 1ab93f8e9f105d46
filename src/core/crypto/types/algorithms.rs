/*!
Algorithm type definitions.

This module defines the key types, signature schemes, encodings and
Diffie-Hellman groups used throughout the crypto subsystem.
*/

use std::fmt;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Public key types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum KeyType {
    /// Matches any key type
    Any,
    /// RSA
    Rsa,
    /// Elliptic curve signature key
    Ecdsa,
}

impl KeyType {
    /// Get the name of the key type as a string
    pub fn name(&self) -> &'static str {
        match self {
            KeyType::Any => "ANY",
            KeyType::Rsa => "RSA",
            KeyType::Ecdsa => "ECDSA",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hash algorithms used for signatures and fingerprints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum HashAlgorithm {
    /// SHA-1 (20-byte output)
    Sha1,
    /// SHA-256 (32-byte output)
    Sha256,
    /// SHA-384 (48-byte output)
    Sha384,
    /// SHA-512 (64-byte output)
    Sha512,
}

impl HashAlgorithm {
    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha384 => "SHA384",
            HashAlgorithm::Sha512 => "SHA512",
        }
    }

    /// Output size in bytes
    pub fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signature schemes understood by `PublicKey::verify`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum SignatureScheme {
    /// ECDSA over a caller-supplied digest, r || s signature
    EcdsaWithNull,
    /// ECDSA with SHA-1, DER-encoded signature (IKEv1 / legacy default)
    EcdsaWithSha1Der,
    /// ECDSA with SHA-256, r || s signature (RFC 4754)
    Ecdsa256,
    /// ECDSA with SHA-384, r || s signature (RFC 4754)
    Ecdsa384,
    /// ECDSA with SHA-512, r || s signature (RFC 4754)
    Ecdsa521,
    /// RSA PKCS#1 v1.5 over a caller-supplied digest
    RsaEmsaPkcs1Null,
    /// RSA PKCS#1 v1.5 with SHA-1
    RsaEmsaPkcs1Sha1,
    /// RSA PKCS#1 v1.5 with SHA-256
    RsaEmsaPkcs1Sha256,
}

impl SignatureScheme {
    /// Get the name of the scheme as a string
    pub fn name(&self) -> &'static str {
        match self {
            SignatureScheme::EcdsaWithNull => "ECDSA_WITH_NULL",
            SignatureScheme::EcdsaWithSha1Der => "ECDSA_WITH_SHA1_DER",
            SignatureScheme::Ecdsa256 => "ECDSA_256",
            SignatureScheme::Ecdsa384 => "ECDSA_384",
            SignatureScheme::Ecdsa521 => "ECDSA_521",
            SignatureScheme::RsaEmsaPkcs1Null => "RSA_EMSA_PKCS1_NULL",
            SignatureScheme::RsaEmsaPkcs1Sha1 => "RSA_EMSA_PKCS1_SHA1",
            SignatureScheme::RsaEmsaPkcs1Sha256 => "RSA_EMSA_PKCS1_SHA256",
        }
    }

    /// The key type a scheme belongs to
    pub fn key_type(&self) -> KeyType {
        match self {
            SignatureScheme::EcdsaWithNull
            | SignatureScheme::EcdsaWithSha1Der
            | SignatureScheme::Ecdsa256
            | SignatureScheme::Ecdsa384
            | SignatureScheme::Ecdsa521 => KeyType::Ecdsa,
            SignatureScheme::RsaEmsaPkcs1Null
            | SignatureScheme::RsaEmsaPkcs1Sha1
            | SignatureScheme::RsaEmsaPkcs1Sha256 => KeyType::Rsa,
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// External key representations and fingerprint types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum KeyEncodingType {
    /// SubjectPublicKeyInfo, ASN.1 DER
    PubSpkiAsn1Der,
    /// Algorithm specific public key structure, ASN.1 DER
    PubAsn1Der,
    /// SHA-1 over the raw public key (EC point)
    IdPubkeySha1,
    /// SHA-1 over the SubjectPublicKeyInfo
    IdPubkeyInfoSha1,
}

impl KeyEncodingType {
    /// Get the name of the encoding as a string
    pub fn name(&self) -> &'static str {
        match self {
            KeyEncodingType::PubSpkiAsn1Der => "PUB_SPKI_ASN1_DER",
            KeyEncodingType::PubAsn1Der => "PUB_ASN1_DER",
            KeyEncodingType::IdPubkeySha1 => "ID_PUBKEY_SHA1",
            KeyEncodingType::IdPubkeyInfoSha1 => "ID_PUBKEY_INFO_SHA1",
        }
    }

    /// Whether this type names a fingerprint rather than an encoding
    pub fn is_fingerprint(&self) -> bool {
        matches!(
            self,
            KeyEncodingType::IdPubkeySha1 | KeyEncodingType::IdPubkeyInfoSha1
        )
    }
}

impl fmt::Display for KeyEncodingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Diffie-Hellman groups, numbered as IKE transform type 4 identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[repr(u16)]
pub enum DhGroup {
    Modp1024 = 2,
    Modp1536 = 5,
    Modp2048 = 14,
    Modp3072 = 15,
    Modp4096 = 16,
    /// NIST P-256 (RFC 5903)
    Ecp256 = 19,
    /// NIST P-384 (RFC 5903)
    Ecp384 = 20,
    /// NIST P-521 (RFC 5903)
    Ecp521 = 21,
}

impl DhGroup {
    /// Look up a group by its IKE identifier
    pub fn from_id(id: u16) -> Option<Self> {
        match id {
            2 => Some(DhGroup::Modp1024),
            5 => Some(DhGroup::Modp1536),
            14 => Some(DhGroup::Modp2048),
            15 => Some(DhGroup::Modp3072),
            16 => Some(DhGroup::Modp4096),
            19 => Some(DhGroup::Ecp256),
            20 => Some(DhGroup::Ecp384),
            21 => Some(DhGroup::Ecp521),
            _ => None,
        }
    }

    /// The IKE identifier of the group
    pub fn id(&self) -> u16 {
        *self as u16
    }

    /// Get the name of the group as a string
    pub fn name(&self) -> &'static str {
        match self {
            DhGroup::Modp1024 => "MODP_1024",
            DhGroup::Modp1536 => "MODP_1536",
            DhGroup::Modp2048 => "MODP_2048",
            DhGroup::Modp3072 => "MODP_3072",
            DhGroup::Modp4096 => "MODP_4096",
            DhGroup::Ecp256 => "ECP_256",
            DhGroup::Ecp384 => "ECP_384",
            DhGroup::Ecp521 => "ECP_521",
        }
    }
}

impl fmt::Display for DhGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u16> for DhGroup {
    type Error = u16;

    fn try_from(id: u16) -> std::result::Result<Self, Self::Error> {
        DhGroup::from_id(id).ok_or(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dh_group_ids() {
        for id in 0..=64u16 {
            if let Some(group) = DhGroup::from_id(id) {
                assert_eq!(group.id(), id);
            }
        }
        assert_eq!(DhGroup::try_from(19), Ok(DhGroup::Ecp256));
        assert_eq!(DhGroup::try_from(3), Err(3));
    }

    #[test]
    fn test_scheme_key_types() {
        assert_eq!(SignatureScheme::Ecdsa384.key_type(), KeyType::Ecdsa);
        assert_eq!(SignatureScheme::RsaEmsaPkcs1Sha256.key_type(), KeyType::Rsa);
    }

    #[test]
    fn test_fingerprint_types() {
        assert!(KeyEncodingType::IdPubkeySha1.is_fingerprint());
        assert!(KeyEncodingType::IdPubkeyInfoSha1.is_fingerprint());
        assert!(!KeyEncodingType::PubSpkiAsn1Der.is_fingerprint());
    }
}
