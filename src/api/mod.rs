//! API route definitions
//!
//! The primary API is GraphQL at /graphql. Plain HTTP routes cover what
//! GraphQL does not, such as health checks.

pub mod health;
