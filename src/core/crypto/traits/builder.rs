/*!
Trait for staged object construction.
*/

use crate::core::crypto::types::BuilderPart;

/// Builds an object from one or more typed parts.
///
/// A builder that receives a part it cannot use cancels itself; `build`
/// then yields `None`.
pub trait Builder: Send {
    /// The finished object
    type Output;

    /// Supply the next part
    fn add(&mut self, part: BuilderPart);

    /// Finish construction, consuming the builder
    fn build(self: Box<Self>) -> Option<Self::Output>;
}
