/*!
Core traits for cryptographic operations.

This module defines the interfaces backends implement and IKE code
calls, without knowing which backend is in use.
*/

pub mod builder;
pub mod diffie_hellman;
pub mod hasher;
pub mod public_key;

// Re-export core traits for easier access
pub use builder::Builder;
pub use diffie_hellman::DiffieHellman;
pub use hasher::{Hasher, HasherFactory};
pub use public_key::PublicKey;
