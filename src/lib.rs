pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod rbac;
pub mod routes;

#[cfg(test)]
pub(crate) mod testing;
