//! Navigation core: locations, the route table and the
//! pure active-link / dispatch logic evaluated against them.

pub mod error;
pub mod location;
pub mod registry;
pub mod shell;

pub use error::RegistryError;
pub use location::{Location, Observation};
pub use registry::{registry, RouteDescriptor, RouteRegistry};
pub use shell::{is_active, resolve, Content, NavLink, ShellState, ShellView};
