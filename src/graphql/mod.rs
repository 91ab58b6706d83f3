//! GraphQL API
//!
//! Query objects live in `queries/`, one per domain, and are combined into
//! the root with `#[derive(MergedObject)]` in `schema.rs`. Model types come
//! from the TMDB service; fields that need extra upstream calls are added in
//! `resolvers.rs`.

pub mod helpers;
pub mod pagination;
pub mod queries;
mod resolvers;
mod schema;

pub use pagination::Paginated;
pub use schema::{CineTastySchema, QueryRoot, build_schema};
