// handlers/mod.rs - Handler tiers
//
// Public (no token) → Protected (token + per-route role gate)
pub mod public;
pub mod protected;
