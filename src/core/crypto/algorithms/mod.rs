/*!
Implementations of the crypto interfaces.

This module provides the concrete backends plugged into the registry.
*/

// Diffie-Hellman backends
pub mod dh;

// Elliptic curve public keys
pub mod ec;

// Hash functions
pub mod hash;

// Re-export factory functions
pub use dh::create_diffie_hellman;
pub use ec::ec_public_key_builder;
