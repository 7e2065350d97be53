//! Page data sources.
//!
//! Pages never reach for their records directly: they go through a
//! [`Catalog`] provided in the component context, so a backend-fed catalog can
//! replace [`SampleCatalog`] without touching any rendering code.

mod records;
pub use records::{Node, Policy, Zone};

mod sample;
pub use sample::SampleCatalog;

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

/// Read-only source of the records shown by the pages.
///
/// Implementations return records in display order; pages neither sort nor
/// filter them.
pub trait Catalog {
    fn nodes(&self) -> Vec<Node>;
    fn zones(&self) -> Vec<Zone>;
    fn policies(&self) -> Vec<Policy>;
}

/// Shareable handle stored in the component context.
#[derive(Clone)]
pub struct CatalogHandle(Rc<dyn Catalog>);

impl CatalogHandle {
    pub fn new<C: Catalog + 'static>(catalog: C) -> Self {
        Self(Rc::new(catalog))
    }

    pub fn sample() -> Self {
        Self::new(SampleCatalog)
    }
}

impl std::ops::Deref for CatalogHandle {
    type Target = dyn Catalog;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for CatalogHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogHandle").finish_non_exhaustive()
    }
}

/// Catalog provided by the platform, or the sample catalog when none was.
pub fn use_catalog() -> CatalogHandle {
    try_use_context::<CatalogHandle>().unwrap_or_else(CatalogHandle::sample)
}
