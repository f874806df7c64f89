//! Library half of the `hdrgen` binary: config discovery, manifest loading,
//! and output persistence.

pub mod config;
pub mod manifest;
pub mod output;
