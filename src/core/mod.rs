//! Core components of the public key layer.
//!
//! This module contains the crypto subsystem, the constants shared by the
//! backends, and error handling.

// Export cryptographic functionality
pub mod crypto;

// Size constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::constants::VERSION;
pub use self::error::{DhError, Error, KeyError, Result};
