// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod catalog;
pub mod config;
pub mod inversion;
pub mod runtime;
pub mod selector;
pub mod session;
