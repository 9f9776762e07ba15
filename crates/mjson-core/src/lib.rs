//! # mjson-core
//!
//! A self-contained JSON value model with a recursive-descent parser and a
//! compact generator. The whole public surface is two functions and one
//! type: [`parse`] turns a UTF-8 text buffer into a [`Value`] tree or a
//! [`ParseError`] with a byte offset, and [`serialize`] turns a [`Value`]
//! tree back into canonical whitespace-free JSON text.
//!
//! ## Quick start
//!
//! ```rust
//! use mjson_core::{parse, serialize};
//!
//! let value = parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! assert_eq!(value["name"].as_str(), Some("Alice"));
//! assert_eq!(value["scores"][1].as_i64(), Some(87));
//!
//! // Canonical text: compact, keys sorted
//! assert_eq!(serialize(&value), r#"{"name":"Alice","scores":[95,87,92]}"#);
//! ```
//!
//! ## Behavior notes
//!
//! - A comma before a closing `]`/`}` is tolerated, and the comma between
//!   elements is optional (see the [`parser`] module doc).
//! - `\uXXXX` escapes are not supported; the basic escape set is.
//! - Trailing non-whitespace after the top-level value is rejected.
//! - Indexing a [`Value`] with the wrong variant, a bad index, or an absent
//!   key panics: contract violations are not recoverable parse errors.
//!
//! ## Modules
//!
//! - [`value`] — the `Value` sum type and its access API
//! - [`parser`] — text → `Value`
//! - [`generator`] — `Value` → text
//! - [`error`] — `ParseError` with byte offsets

pub mod error;
pub mod generator;
pub mod parser;
pub mod value;

pub use error::ParseError;
pub use generator::serialize;
pub use parser::{parse, MAX_DEPTH};
pub use value::Value;
