//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Public endpoints only ever read
//! published rows, so the read methods bake the `published = TRUE` gate in.

pub mod blog_post_repo;
pub mod inquiry_repo;
pub mod product_repo;
pub mod project_repo;

pub use blog_post_repo::BlogPostRepo;
pub use inquiry_repo::InquiryRepo;
pub use product_repo::ProductRepo;
pub use project_repo::ProjectRepo;
