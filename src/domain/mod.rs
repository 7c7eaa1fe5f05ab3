pub mod company_domain;

pub use company_domain::*;
