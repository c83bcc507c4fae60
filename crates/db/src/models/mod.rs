//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Serialize` public-shape DTO with a `from_row` constructor that
//!   applies the storefront defaulting rules and resolves media keys
//! - A `Deserialize` create DTO where the entity is writable from here

pub mod blog_post;
pub mod inquiry;
pub mod product;
pub mod project;
