//! Route registry: the ordered table of navigable destinations.
//!
//! Both the sidebar and the content region are driven from this table. It is
//! built once, validated, and never changes afterwards.

use std::collections::HashSet;

use dioxus::prelude::*;
use once_cell::sync::Lazy;

use super::error::RegistryError;
use crate::t;
use crate::views::{Dashboard, Nodes, Policies, Zones};

/// One navigable destination.
#[derive(Debug, Clone, Copy)]
pub struct RouteDescriptor {
    /// URL path, unique within a registry.
    pub path: &'static str,
    /// Canonical (untranslated) name of the destination.
    pub label: &'static str,
    /// Localized navigation label.
    pub title: fn() -> String,
    /// Page producer bound at construction time.
    pub render: fn() -> Element,
}

impl RouteDescriptor {
    /// Only the root route requires an exact location match to be active;
    /// otherwise it would be highlighted for every page.
    pub fn exact_match(&self) -> bool {
        self.path == "/"
    }
}

/// Validated, ordered route table.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    routes: Vec<RouteDescriptor>,
}

impl RouteRegistry {
    /// Validate `routes` and freeze them into a registry. Order is kept as
    /// given and determines the navigation order.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RegistryError> {
        if routes.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(routes.len());
        for route in &routes {
            validate_path(route)?;
            if !seen.insert(route.path.to_ascii_lowercase()) {
                return Err(RegistryError::DuplicatePath { path: route.path });
            }
        }

        Ok(Self { routes })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered paths in navigation order.
    pub fn paths(&self) -> Vec<&'static str> {
        self.routes.iter().map(|r| r.path).collect()
    }

    /// Descriptor registered at exactly `path`, ignoring ASCII case.
    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.path.eq_ignore_ascii_case(path))
    }
}

fn validate_path(route: &RouteDescriptor) -> Result<(), RegistryError> {
    let path = route.path;
    if path.is_empty() {
        return Err(RegistryError::MissingPath { label: route.label });
    }
    let well_formed = path == "/" || (path.starts_with('/') && !path.ends_with('/'));
    if !well_formed {
        return Err(RegistryError::MalformedPath {
            label: route.label,
            path,
        });
    }
    Ok(())
}

/// The console's destinations, in sidebar order.
pub fn default_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor {
            path: "/",
            label: "Dashboard",
            title: || t!("nav-dashboard"),
            render: || rsx! { Dashboard {} },
        },
        RouteDescriptor {
            path: "/nodes",
            label: "Nodes",
            title: || t!("nav-nodes"),
            render: || rsx! { Nodes {} },
        },
        RouteDescriptor {
            path: "/zones",
            label: "Zones",
            title: || t!("nav-zones"),
            render: || rsx! { Zones {} },
        },
        RouteDescriptor {
            path: "/policies",
            label: "Policies",
            title: || t!("nav-policies"),
            render: || rsx! { Policies {} },
        },
    ]
}

static REGISTRY: Lazy<RouteRegistry> = Lazy::new(|| {
    RouteRegistry::new(default_routes()).expect("built-in route table must be well-formed")
});

/// Process-wide registry, validated on first access.
pub fn registry() -> &'static RouteRegistry {
    &REGISTRY
}
