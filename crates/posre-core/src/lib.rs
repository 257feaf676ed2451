//! Core primitives shared by the posre compiler and VM.
//!
//! - [`Collation`]: the locale capability both stages consume
//! - [`CLocale`] / [`Utf8Locale`]: the built-in adapters
//! - [`CharClass`]: POSIX `[:name:]` classes
//! - [`Colors`]: ANSI palette for dumps and traces

mod class;
mod collation;
mod colors;
mod locale;


pub use class::CharClass;
pub use collation::{Collation, posix_symbol};
pub use colors::Colors;
pub use locale::{CLocale, Utf8Locale};
