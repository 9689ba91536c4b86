pub mod global_context;
pub mod navbar;

pub use global_context::SiteContext;
