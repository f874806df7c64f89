//! Header generators for build artifacts.
//!
//! Responsibilities:
//! - Render the platform umbrella import, optionally behind a guard.
//! - Assemble a prefix header from the snippets and raw files of ordered units.
//!
//! # Port traits
//!
//! Raw file reads go through [`SourceReader`](ports::SourceReader):
//! - [`FsSourceReader`](ports::FsSourceReader) reads from disk
//! - [`InMemorySourceReader`](ports::InMemorySourceReader) serves fixed contents
//!
//! Nothing in this crate writes files; callers own persistence.

pub mod error;
pub mod header;
pub mod ports;
pub mod prefix;
pub mod render;

pub use error::{HeaderError, HeaderResult};
pub use header::HeaderAssembler;
pub use ports::{FsSourceReader, InMemorySourceReader, SourceReader};
pub use prefix::{PrefixHeaderAssembler, unique_snippets};
pub use render::{ImportRenderer, ObjcGuard, PlainImport};
