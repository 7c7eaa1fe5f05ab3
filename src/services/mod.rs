pub mod domain_resolver;
pub mod duckduckgo;

pub use domain_resolver::*;
pub use duckduckgo::*;
