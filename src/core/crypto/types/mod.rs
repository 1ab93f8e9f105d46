/*!
Type definitions for the crypto subsystem.
*/

pub mod algorithms;
pub mod parts;

pub use algorithms::{DhGroup, HashAlgorithm, KeyEncodingType, KeyType, SignatureScheme};
pub use parts::{BuilderPart, KeyIdentity};
