/*!
# IKE Public Key

Public key and Diffie-Hellman abstraction for an IKE daemon.

## Overview

This library provides the key objects IKE sessions use to authenticate
peers and agree on keys:

- A polymorphic public key contract with verify, encrypt, fingerprint and
  encoding operations
- An ECDSA backend for NIST P-256 and P-384 keys loaded from
  SubjectPublicKeyInfo DER
- Reference-counted key handles shared safely across threads
- A bounded fingerprint cache purged when a key is dropped
- Diffie-Hellman adapters running in software or in an external trusted
  key manager
- A registry creating keys and exchanges without naming a backend

## Example

```no_run
use ike_pubkey::{create_public_key, BuilderPart, KeyType, PublicKey, SignatureScheme};

# let spki_der: Vec<u8> = Vec::new();
# let data: &[u8] = b"";
# let signature: &[u8] = b"";
let key = create_public_key(KeyType::Ecdsa, &[BuilderPart::BlobAsn1Der(spki_der)])
    .expect("valid key");
let valid = key.verify(SignatureScheme::Ecdsa256, data, signature);
let peer = key.get_ref();
peer.destroy();
key.destroy();
# let _ = valid;
```
*/

// Core components
pub mod core;

// Re-export commonly used types for convenience
pub use core::constants::{sizes, VERSION};
pub use core::error::{DhError, Error, KeyError, Result};

pub use core::crypto::algorithms::dh::{EcpDiffieHellman, KeyManager, TkmDiffieHellman};
pub use core::crypto::algorithms::ec::{EcPublicKey, EcPublicKeyBuilder};
pub use core::crypto::algorithms::hash::{SoftwareHasher, SoftwareHasherFactory};
pub use core::crypto::types::{
    BuilderPart, DhGroup, HashAlgorithm, KeyEncodingType, KeyIdentity, KeyType, SignatureScheme,
};
pub use core::crypto::{
    Builder, CryptoConfig, CryptoContext, DiffieHellman, FingerprintCache, Hasher, HasherFactory,
    PublicKey, SharedPublicKey, TkmConfig, WeakPublicKey,
};

// Re-export registry functions
pub use core::crypto::registry::{
    create_diffie_hellman, create_public_key, create_public_key_with, list_diffie_hellman,
    list_key_builders, register_diffie_hellman, register_key_builder, CryptoRegistry,
};
