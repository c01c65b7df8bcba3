//! Toolkit-independent theme engine.
//!
//! A theme is a loosely typed tree of style tokens ([`ThemeValue`]). Trees are
//! combined with [`merge`], and a [`ThemeStore`] keeps the construction-time
//! default next to the live theme so it can be patched incrementally
//! ([`ThemeStore::update`]) or reset and patched ([`ThemeStore::replace`]).

mod builtin;
pub use builtin::*;

mod error;
pub use error::*;

mod merge;
pub use merge::*;

mod store;
pub use store::*;

mod value;
pub use value::*;
