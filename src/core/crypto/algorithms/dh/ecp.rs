/*!
Elliptic curve Diffie-Hellman over NIST prime curves (RFC 5903).

Public values are `x || y` without a point prefix; the shared secret is
the x coordinate of the shared point.
*/

use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand_core::OsRng;
use tracing::debug;

use crate::core::constants::sizes;
use crate::core::crypto::codec;
use crate::core::crypto::traits::diffie_hellman::DiffieHellman;
use crate::core::crypto::types::DhGroup;
use crate::core::error::DhError;

enum EcpSecret {
    P256(p256::ecdh::EphemeralSecret),
    P384(p384::ecdh::EphemeralSecret),
}

/// Software ECDH exchange for groups 19 and 20
pub struct EcpDiffieHellman {
    group: DhGroup,
    secret: EcpSecret,
    shared_secret: Option<Vec<u8>>,
}

impl EcpDiffieHellman {
    /// Start an exchange with a fresh ephemeral secret
    pub fn try_create(group: DhGroup) -> Result<Self, DhError> {
        let secret = match group {
            DhGroup::Ecp256 => EcpSecret::P256(p256::ecdh::EphemeralSecret::random(&mut OsRng)),
            DhGroup::Ecp384 => EcpSecret::P384(p384::ecdh::EphemeralSecret::random(&mut OsRng)),
            _ => return Err(DhError::UnsupportedGroup(group)),
        };
        Ok(Self {
            group,
            secret,
            shared_secret: None,
        })
    }

    /// Start an exchange, `None` if the group is not an ECP group we implement
    pub fn create(group: DhGroup) -> Option<Self> {
        Self::try_create(group)
            .inspect_err(|err| debug!("{}", err))
            .ok()
    }

    fn field_size(&self) -> usize {
        match self.secret {
            EcpSecret::P256(_) => sizes::p256::FIELD_BYTES,
            EcpSecret::P384(_) => sizes::p384::FIELD_BYTES,
        }
    }
}

impl DiffieHellman for EcpDiffieHellman {
    fn group(&self) -> DhGroup {
        self.group
    }

    fn set_other_public_value(&mut self, value: &[u8]) -> Result<(), DhError> {
        if value.len() != 2 * self.field_size() {
            return Err(DhError::InvalidPublicValue);
        }
        let point = codec::ecp_public_value_to_sec1(value);
        let shared = match &self.secret {
            EcpSecret::P256(secret) => {
                let peer = p256::PublicKey::from_sec1_bytes(&point)
                    .map_err(|_| DhError::InvalidPublicValue)?;
                secret.diffie_hellman(&peer).raw_secret_bytes().to_vec()
            }
            EcpSecret::P384(secret) => {
                let peer = p384::PublicKey::from_sec1_bytes(&point)
                    .map_err(|_| DhError::InvalidPublicValue)?;
                secret.diffie_hellman(&peer).raw_secret_bytes().to_vec()
            }
        };
        self.shared_secret = Some(shared);
        Ok(())
    }

    fn my_public_value(&self) -> Result<Vec<u8>, DhError> {
        let point = match &self.secret {
            EcpSecret::P256(secret) => secret.public_key().to_encoded_point(false).as_bytes().to_vec(),
            EcpSecret::P384(secret) => secret.public_key().to_encoded_point(false).as_bytes().to_vec(),
        };
        codec::sec1_to_ecp_public_value(&point).ok_or(DhError::InvalidPublicValue)
    }

    fn shared_secret(&self) -> Result<Vec<u8>, DhError> {
        self.shared_secret.clone().ok_or(DhError::PeerValueMissing)
    }
}
