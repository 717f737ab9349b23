//! Induce a template from text samples that share a structural skeleton.
//!
//! A template is an ordered run of literal blocks and wildcard gaps. Samples
//! are folded in one at a time: each is aligned against the current template
//! by repeatedly anchoring on the longest common substring, and whatever does
//! not line up becomes a wildcard.
//!
//! ```
//! use templater::{Templater, TemplaterConfig};
//!
//! let mut t = Templater::new(TemplaterConfig::default());
//! t.learn("foo bar baz").unwrap();
//! t.learn("foo qux baz").unwrap();
//! assert_eq!(t.render().unwrap(), "foo ||| baz");
//! ```
//!
//! Inputs are plain text. Fetching documents and stripping markup happen
//! upstream; [`text::normalize_whitespace`] tidies what such a source hands over.

pub mod builder;
pub mod core;
pub mod error;
pub mod fixture;
pub mod instrumentation;
pub mod lcs;
pub mod learner;
pub mod text;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use crate::builder::{align, align_str};
pub use crate::core::{Render, SEPARATOR, Segment, Template, TemplaterConfig};
pub use crate::error::{Error, Result};
pub use crate::lcs::{Lcs, find_lcs, find_lcs_str, lcs_triple};
pub use crate::learner::Templater;
