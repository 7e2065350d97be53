//! Records displayed by the pages.
//!
//! Field names follow the controller's JSON encoding so that responses from
//! its API deserialize as-is; fields the pages don't show are ignored.

use serde::{Deserialize, Serialize};

/// An exit or gateway node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,
    pub address: String,
    pub zone: String,
}

/// A named grouping of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub name: String,
    pub description: String,
}

/// A routing/security policy between two zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub name: String,
    pub source: String,
    pub destination: String,
    pub action: String,
}
