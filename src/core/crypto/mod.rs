/*!
Cryptographic components of the public key layer.

This module provides the public key contract, the EC backend and its
builder, the fingerprint cache, and the Diffie-Hellman adapters.
*/

// Interfaces implemented by the backends
pub mod traits;

// Algorithm identifiers and builder inputs
pub mod types;

// Backend implementations
pub mod algorithms;

// Signature and point encoding helpers
pub mod codec;

// Config
pub mod config;

// Shared services of the backends
pub mod context;

// Fingerprint cache
pub mod fingerprint;

// Reference-counted key handles
pub mod key;

// Registry for backend management
pub mod registry;

// Re-export frequently used types
pub use config::{CryptoConfig, TkmConfig};
pub use context::CryptoContext;
pub use fingerprint::FingerprintCache;
pub use key::{SharedPublicKey, WeakPublicKey};
pub use traits::{Builder, DiffieHellman, Hasher, HasherFactory, PublicKey};
pub use registry::{
    create_diffie_hellman, create_public_key, create_public_key_with,
    register_diffie_hellman, register_key_builder,
};
