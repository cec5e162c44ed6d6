// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Resource kinds recognized by the pipeline and the per-resource context
//! handed to context-aware processors.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Asset kinds the pipeline knows how to route.
///
/// The set is closed. [`ResourceType::ALL`] lists the variants in their
/// canonical order, which is the order used whenever a processor applies to
/// every type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Js,
    Css,
}

impl ResourceType {
    /// Every resource type, in canonical definition order.
    pub const ALL: [ResourceType; 2] = [ResourceType::Js, ResourceType::Css];

    pub fn values() -> &'static [ResourceType] {
        &Self::ALL
    }

    /// File extension (without the dot) associated with this type.
    pub fn extension(self) -> &'static str {
        match self {
            ResourceType::Js => "js",
            ResourceType::Css => "css",
        }
    }

    /// Infer the type from a uri or path by its extension, ignoring case.
    ///
    /// ```
    /// use asset_chain::model::ResourceType;
    ///
    /// assert_eq!(ResourceType::from_uri("/static/app.JS"), Some(ResourceType::Js));
    /// assert_eq!(ResourceType::from_uri("theme.css?v=3"), Some(ResourceType::Css));
    /// assert_eq!(ResourceType::from_uri("logo.png"), None);
    /// ```
    pub fn from_uri(uri: &str) -> Option<Self> {
        let path = uri.split(['?', '#']).next().unwrap_or(uri);
        let (_, extension) = path.rsplit_once('.')?;
        extension.parse().ok()
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "js" => Ok(ResourceType::Js),
            "css" => Ok(ResourceType::Css),
            other => Err(format!("Unknown resource type: {}", other)),
        }
    }
}

/// Context describing the resource currently being processed.
///
/// Pre-processors receive it for every resource they run against.
/// Post-processors run on merged groups and never see one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub uri: String,
    pub resource_type: ResourceType,
    /// Whether the minimized variant of this resource was requested.
    pub minimize: bool,
}

impl Resource {
    pub fn new(uri: impl Into<String>, resource_type: ResourceType) -> Self {
        Self {
            uri: uri.into(),
            resource_type,
            minimize: true,
        }
    }

    /// Build a resource whose type is inferred from the uri extension.
    pub fn from_uri(uri: impl Into<String>) -> Option<Self> {
        let uri = uri.into();
        let resource_type = ResourceType::from_uri(&uri)?;
        Some(Self::new(uri, resource_type))
    }

    pub fn with_minimize(mut self, minimize: bool) -> Self {
        self.minimize = minimize;
        self
    }
}
