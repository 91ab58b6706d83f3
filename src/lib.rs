//! Cine Tasty backend: a GraphQL gateway over TheMovieDB

pub mod api;
pub mod app;
pub mod config;
pub mod graphql;
pub mod services;

pub use app::{AppState, build_app};
