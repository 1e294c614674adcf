//! Adapter Module
//!
//! Typed front end over the string store: codecs for converting caller
//! types to and from the stored string representation, and the generic
//! [`TypedStore`] built on them.

mod codec;
mod typed;

// Re-export public types
pub use codec::{Codec, CodecError, Primitive};
pub use typed::TypedStore;
