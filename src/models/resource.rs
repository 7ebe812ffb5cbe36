//! Infrastructure resource model.
//!
//! Resources describe the physical infrastructure trains compete for.
//! Only platforms participate in assignment today; other categories
//! (tracks, junctions) are accepted and carried through unchanged so
//! requests can describe the full station layout.

use serde::{Deserialize, Serialize};

/// Resource category that participates in platform assignment.
pub const PLATFORM: &str = "platform";

/// A piece of station infrastructure.
///
/// The category is a free string rather than an enum: unknown categories
/// deserialize cleanly and are simply inert during assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Resource category (`"platform"`, `"track"`, ...).
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Number of simultaneous occupants the resource admits.
    pub capacity: i32,
    /// Physical length in meters.
    pub length: i32,
    /// Entry node in the station topology, if modeled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_node: Option<String>,
    /// Exit node in the station topology, if modeled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_node: Option<String>,
}

impl Resource {
    /// Creates a new resource with the given ID and category.
    pub fn new(id: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
            capacity: 1,
            length: 0,
            start_node: None,
            end_node: None,
        }
    }

    /// Creates a platform resource.
    pub fn platform(id: impl Into<String>) -> Self {
        Self::new(id, PLATFORM)
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the physical length in meters.
    pub fn with_length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }

    /// Sets the topology end points.
    pub fn with_nodes(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_node = Some(start.into());
        self.end_node = Some(end.into());
        self
    }

    /// Whether this resource can host an arriving train.
    #[inline]
    pub fn is_platform(&self) -> bool {
        self.resource_type == PLATFORM
    }
}
