// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Routes: `/`, `/health`, `/api/stats/dashboard`
// Middleware: none

pub mod service;

pub use service::{dashboard, health, method_not_allowed, not_found, root};
