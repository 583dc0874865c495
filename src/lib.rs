//! A value container that tells "absent" apart from "present" and, beyond
//! that, "explicitly absent" apart from "never touched".
//!
//! ```
//! use nullable::prelude::*;
//!
//! let mut age = null::<u32>();
//! assert!(!age.is_valid());
//! assert_eq!(age.get_or(18), 18);
//!
//! age.set(42);
//! assert_eq!(age.map(|a| a + 1), valid(43));
//! ```
//!
//! With the `json` feature (on by default) the container serializes as the
//! bare value, or as `null` when invalid.

mod nullable;
#[cfg(feature = "json")]
mod json;

pub mod prelude;

pub use nullable::Nullable;
