//! Codec Module
//!
//! Conversion functions between caller types and the store's string
//! representation, with built-in codecs for a closed set of primitives.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

// == Codec Error ==
/// Failure to convert a value to or from its string representation.
///
/// Carries the display name of the type that failed to convert.
#[derive(Error, Debug, Clone)]
#[error("cannot convert {type_name}: {reason}")]
pub struct CodecError {
    /// Display name of the offending type
    pub type_name: &'static str,
    /// Human-readable failure description
    pub reason: String,
}

impl CodecError {
    /// Creates a codec error for type `T`.
    pub fn new<T>(reason: impl Into<String>) -> Self {
        Self {
            type_name: type_name::<T>(),
            reason: reason.into(),
        }
    }
}

// == Primitive Trait ==
/// The closed set of types with built-in string codecs.
///
/// Strings convert by identity; numeric types and bool use Rust's
/// `Display`/`FromStr`, which are locale-independent, and for floats emit
/// the shortest representation that parses back to the same value. Any
/// other type must supply its own [`Codec`] pair; there is no runtime
/// fallback, so a missing conversion is a compile error rather than a
/// deferred failure.
pub trait Primitive: Sized {
    /// Converts the value to its stored string form.
    fn to_text(&self) -> String;
    /// Parses the value back from its stored string form.
    fn from_text(text: &str) -> Result<Self, CodecError>;
}

impl Primitive for String {
    fn to_text(&self) -> String {
        self.clone()
    }

    fn from_text(text: &str) -> Result<Self, CodecError> {
        Ok(text.to_string())
    }
}

macro_rules! primitive_via_parse {
    ($($ty:ty),* $(,)?) => {$(
        impl Primitive for $ty {
            fn to_text(&self) -> String {
                self.to_string()
            }

            fn from_text(text: &str) -> Result<Self, CodecError> {
                text.parse().map_err(|err| {
                    CodecError::new::<$ty>(format!("cannot parse {:?}: {}", text, err))
                })
            }
        }
    )*};
}

primitive_via_parse!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// == Codec ==
/// An encode/decode function pair for one type.
///
/// Round-trip law: for every value accepted by `encode`,
/// `decode(encode(v))` must equal `v` under the caller's notion of
/// equality. The adapter relies on this but cannot enforce it; a codec
/// pair that violates it makes distinct values indistinguishable in the
/// store.
pub struct Codec<T> {
    encode: Arc<dyn Fn(&T) -> Result<String, CodecError> + Send + Sync>,
    decode: Arc<dyn Fn(&str) -> Result<T, CodecError> + Send + Sync>,
}

impl<T> Codec<T> {
    // == Constructor ==
    /// Creates a codec from a caller-supplied encode/decode pair.
    pub fn new(
        encode: impl Fn(&T) -> Result<String, CodecError> + Send + Sync + 'static,
        decode: impl Fn(&str) -> Result<T, CodecError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    // == Encode ==
    /// Converts a value to its stored string form.
    pub fn encode(&self, value: &T) -> Result<String, CodecError> {
        (self.encode)(value)
    }

    // == Decode ==
    /// Parses a value back from its stored string form.
    pub fn decode(&self, text: &str) -> Result<T, CodecError> {
        (self.decode)(text)
    }
}

impl<T: Primitive + 'static> Codec<T> {
    /// Built-in codec, only available for the [`Primitive`] set.
    pub fn primitive() -> Self {
        Self::new(|value: &T| Ok(value.to_text()), T::from_text)
    }
}

impl<T> Clone for Codec<T> {
    fn clone(&self) -> Self {
        Self {
            encode: Arc::clone(&self.encode),
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> fmt::Debug for Codec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("type", &type_name::<T>())
            .finish()
    }
}
