// handlers/protected/mod.rs - Protected handlers (token + role gate required)
//
// Route Prefix: /api/*
// Middleware: `authenticate` on the router, `require_gate` on each route.

pub mod auth;
pub mod gated;

pub use auth::whoami;
pub use gated::forward;
