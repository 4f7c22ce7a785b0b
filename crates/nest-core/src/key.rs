//! Namespaced key builder
//!
//! A builder is seeded with a prefix and accumulates segments:
//!
//! ```text
//! KeyBuilder::of::<User>()      prefix  "User"
//!     .cat(5)                   buffer  "User:5:"
//!     .cat("email")             buffer  "User:5:email:"
//!     .key()                    ->      "User:5:email"   (state resets)
//! ```
//!
//! Reading the key hands back the buffer without its trailing delimiter and
//! returns the builder to [`KeyState::Finalized`]; the next `cat` starts over
//! from the prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use crate::type_name::simple_type_name;

/// Separator between the prefix and every segment
pub const DELIMITER: char = ':';

/// A finished namespaced key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Get the key as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Key {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Construction state of a [`KeyBuilder`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeyState {
    /// Nothing pending; the next `cat` starts from the prefix
    #[default]
    Finalized,
    /// Prefix and segments appended so far, each followed by the delimiter
    Accumulating(String),
}

/// Builder for colon-delimited keys
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyBuilder {
    prefix: String,
    state: KeyState,
}

impl KeyBuilder {
    /// Create a builder seeded with a literal prefix
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            state: KeyState::Finalized,
        }
    }

    /// Create a builder with an empty prefix
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Create a builder seeded with the simple name of `T`
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self::new(simple_type_name::<T>())
    }

    /// Create a builder seeded with the simple type name of `model`
    ///
    /// The name comes from the static type of the reference, not the value
    /// behind it: a `Box<dyn Model>` seeds `"Box"` and a `&dyn Model` seeds
    /// `"dyn Model"`. Pass the concrete type, or use [`KeyBuilder::of`].
    #[must_use]
    pub fn for_model<T: ?Sized>(_model: &T) -> Self {
        Self::of::<T>()
    }

    /// The seed every key starts from
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Current construction state
    #[inline]
    pub fn state(&self) -> &KeyState {
        &self.state
    }

    /// Whether segments have been appended since the last `key()`
    #[inline]
    pub fn is_accumulating(&self) -> bool {
        matches!(self.state, KeyState::Accumulating(_))
    }

    /// Append one segment
    pub fn cat(&mut self, segment: impl fmt::Display) -> &mut Self {
        use fmt::Write;

        let mut buffer = match std::mem::take(&mut self.state) {
            KeyState::Finalized => {
                let mut buffer = String::with_capacity(self.prefix.len() + 16);
                buffer.push_str(&self.prefix);
                buffer.push(DELIMITER);
                buffer
            }
            KeyState::Accumulating(buffer) => buffer,
        };
        // Writing into a String cannot fail
        let _ = write!(buffer, "{segment}{DELIMITER}");
        self.state = KeyState::Accumulating(buffer);
        self
    }

    /// Finish the pending key and reset to [`KeyState::Finalized`]
    ///
    /// Without any `cat` since the last call this is just the prefix.
    pub fn key(&mut self) -> Key {
        match std::mem::take(&mut self.state) {
            KeyState::Finalized => Key(self.prefix.clone()),
            KeyState::Accumulating(mut buffer) => {
                buffer.pop();
                Key(buffer)
            }
        }
    }

    /// Finish the pending key and start a new builder seeded with it
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.key().into_inner())
    }
}
