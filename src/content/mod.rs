//! Static content split across logical submodules: the tip catalog with its
//! category registry, and the inert page content for the other views.

mod catalog;
mod site;

pub use catalog::{seed_catalog, ContentCatalog};
pub use site::SiteContent;
