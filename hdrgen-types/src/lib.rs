//! Shared DTOs for the hdrgen workspace.
//!
//! # Design constraints
//! - These types describe inputs handed over by the surrounding build pipeline.
//! - Nothing here performs I/O; manifests are parsed from strings.
//! - Unit order is caller-supplied and must be preserved by every consumer.

pub mod manifest;
pub mod platform;
pub mod unit;

pub use manifest::{ManifestError, ManifestFormat, UnitManifest};
pub use platform::{Platform, PlatformDescriptor};
pub use unit::{InputUnit, Snippet};
