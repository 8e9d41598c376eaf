//! Insertion-ordered key/value store whose key equality follows a mutable
//! [`CompareMode`].
//!
//! Uniqueness is checked when a key is inserted, under whichever mode is
//! active at that moment. Switching modes later never revisits stored keys,
//! so a store may hold entries that would collide under the new mode.

pub mod compare;
pub mod error;
pub mod mode;
pub mod store;

pub use compare::{BinaryComparer, KeyComparer, TextComparer};
pub use error::{DictionaryError, Result};
pub use mode::{CompareMethod, CompareMode};
pub use scrdict_value::Value;
pub use store::Dictionary;
