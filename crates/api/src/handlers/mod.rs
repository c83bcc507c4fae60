//! Request handlers, one module per public resource.

pub mod blog;
pub mod inquiries;
pub mod products;
pub mod projects;
pub mod services;
