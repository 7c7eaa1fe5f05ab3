pub mod default_route;
pub mod domain_route;
