//! Navigation shell logic, kept free of rendering concerns.
//!
//! Everything here is a pure function of `(registry, location)`: which
//! sidebar links are active, and which page the content region shows.

use super::location::{Location, Observation};
use super::registry::{RouteDescriptor, RouteRegistry};
use crate::config::nav::{ACTIVE_LINK_CLASS, LINK_CLASS};

/// Whether the link for `route` is highlighted at `location`.
///
/// The root link requires an exact match. Every other link stays active for
/// locations nested below its path (`/nodes/exit-us-east-1` keeps `/nodes`
/// highlighted), but not for siblings that merely share a prefix
/// (`/nodes-archive`). Paths compare without regard to ASCII case.
pub fn is_active(route: &RouteDescriptor, location: &Location) -> bool {
    let current = location.as_str();
    if route.exact_match() {
        return current == route.path;
    }
    match current.get(..route.path.len()) {
        Some(head) if head.eq_ignore_ascii_case(route.path) => {
            let rest = &current[route.path.len()..];
            rest.is_empty() || rest.starts_with('/')
        }
        _ => false,
    }
}

/// What the content region renders.
#[derive(Debug, Clone, Copy)]
pub enum Content<'r> {
    Page(&'r RouteDescriptor),
    NotFound,
}

impl Content<'_> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Content::NotFound)
    }

    pub fn route(&self) -> Option<&RouteDescriptor> {
        match *self {
            Content::Page(route) => Some(route),
            Content::NotFound => None,
        }
    }
}

/// Select the page registered at exactly `location` (ASCII case aside).
pub fn resolve<'r>(registry: &'r RouteRegistry, location: &Location) -> Content<'r> {
    match registry.find(location.as_str()) {
        Some(route) => Content::Page(route),
        None => Content::NotFound,
    }
}

/// One sidebar entry with its derived state.
#[derive(Debug, Clone, Copy)]
pub struct NavLink<'r> {
    pub route: &'r RouteDescriptor,
    pub active: bool,
}

impl NavLink<'_> {
    pub fn class(&self) -> &'static str {
        if self.active {
            ACTIVE_LINK_CLASS
        } else {
            LINK_CLASS
        }
    }
}

/// Everything the shell needs to render one location.
#[derive(Debug, Clone)]
pub struct ShellView<'r> {
    pub seq: u64,
    pub location: Location,
    pub links: Vec<NavLink<'r>>,
    pub content: Content<'r>,
}

impl<'r> ShellView<'r> {
    pub fn evaluate(registry: &'r RouteRegistry, observation: Observation) -> Self {
        let Observation { seq, location } = observation;
        let links = registry
            .iter()
            .map(|route| NavLink {
                route,
                active: is_active(route, &location),
            })
            .collect();
        let content = resolve(registry, &location);

        match content {
            Content::Page(route) => {
                tracing::debug!(seq, location = %location, page = route.label, "dispatching page")
            }
            Content::NotFound => {
                tracing::warn!(seq, location = %location, "no route registered for location")
            }
        }

        Self {
            seq,
            location,
            links,
            content,
        }
    }

    pub fn active_links(&self) -> impl Iterator<Item = &NavLink<'r>> {
        self.links.iter().filter(|link| link.active)
    }
}

/// Tracks the most recently observed location and the view applied for it.
///
/// Views are only applied when they belong to the newest observation, so a
/// view computed for a superseded location can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct ShellState<'r> {
    latest: u64,
    applied: Option<ShellView<'r>>,
}

impl<'r> ShellState<'r> {
    pub fn new() -> Self {
        Self {
            latest: 0,
            applied: None,
        }
    }

    /// Record a newly observed location.
    pub fn observe(&mut self, location: Location) -> Observation {
        self.latest += 1;
        Observation {
            seq: self.latest,
            location,
        }
    }

    /// Apply `view` if it belongs to the newest observation. Returns whether
    /// it was applied.
    pub fn apply(&mut self, view: ShellView<'r>) -> bool {
        if view.seq != self.latest {
            tracing::debug!(
                stale = view.seq,
                latest = self.latest,
                "discarding view for superseded location"
            );
            return false;
        }
        self.applied = Some(view);
        true
    }

    /// Observe `location` and apply the view computed for it. Re-observing
    /// the location that is already applied reuses the current view.
    pub fn navigate(&mut self, registry: &'r RouteRegistry, location: Location) -> ShellView<'r> {
        if let Some(view) = &self.applied {
            if view.seq == self.latest && view.location == location {
                return view.clone();
            }
        }
        let view = ShellView::evaluate(registry, self.observe(location));
        self.applied = Some(view.clone());
        view
    }

    pub fn current(&self) -> Option<&ShellView<'r>> {
        self.applied.as_ref()
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest
    }
}
