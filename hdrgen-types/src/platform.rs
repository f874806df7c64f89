use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform a header is generated for, as handed over by the build pipeline.
///
/// The name is kept verbatim. Whether it is recognized is decided by
/// [`Platform::from_name`] when the platform import is rendered, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "DescriptorRepr")]
pub struct PlatformDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_target: Option<String>,
}

impl PlatformDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deployment_target: None,
        }
    }

    pub fn with_deployment_target(mut self, target: impl Into<String>) -> Self {
        self.deployment_target = Some(target.into());
        self
    }

    /// Resolve against the recognized set.
    pub fn platform(&self) -> Option<Platform> {
        Platform::from_name(&self.name)
    }
}

impl fmt::Display for PlatformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.deployment_target {
            Some(target) => write!(f, "{} {}", self.name, target),
            None => f.write_str(&self.name),
        }
    }
}

// Manifests may spell the platform as a bare name or as a table.
#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptorRepr {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        deployment_target: Option<String>,
    },
}

impl From<DescriptorRepr> for PlatformDescriptor {
    fn from(repr: DescriptorRepr) -> Self {
        match repr {
            DescriptorRepr::Name(name) => Self::new(name),
            DescriptorRepr::Full {
                name,
                deployment_target,
            } => Self {
                name,
                deployment_target,
            },
        }
    }
}

/// The recognized platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Osx,
    Tvos,
    Watchos,
    Visionos,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Ios,
        Platform::Osx,
        Platform::Tvos,
        Platform::Watchos,
        Platform::Visionos,
    ];

    /// Look up a platform by name. `macos` is accepted as an alias of `osx`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ios" => Some(Platform::Ios),
            "osx" | "macos" => Some(Platform::Osx),
            "tvos" => Some(Platform::Tvos),
            "watchos" => Some(Platform::Watchos),
            "visionos" => Some(Platform::Visionos),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Osx => "osx",
            Platform::Tvos => "tvos",
            Platform::Watchos => "watchos",
            Platform::Visionos => "visionos",
        }
    }

    /// The umbrella header import line, without a trailing newline.
    pub fn umbrella_import(self) -> &'static str {
        match self {
            Platform::Ios | Platform::Tvos | Platform::Visionos => "#import <UIKit/UIKit.h>",
            Platform::Osx => "#import <Cocoa/Cocoa.h>",
            Platform::Watchos => "#import <Foundation/Foundation.h>",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
