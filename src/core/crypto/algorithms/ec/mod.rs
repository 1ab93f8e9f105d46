/*!
Elliptic curve public key backend.

Supports SubjectPublicKeyInfo encoded keys on NIST P-256 and P-384.
*/

mod builder;
mod public_key;

pub use builder::{ec_public_key_builder, EcPublicKeyBuilder, PublicKeyBuilder};
pub use public_key::{scheme_params, EcPublicKey, SignatureEncoding, FINGERPRINT_HASH};
