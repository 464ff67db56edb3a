pub mod site_walker;

pub use site_walker::{SiteEntry, SiteWalkError, SiteWalker};
