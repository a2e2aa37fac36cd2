//! Configuration model for lockfile-sync.
//!
//! Built-in defaults reproduce the fixed behavior (run `npm install` in the
//! project root). An optional YAML file can override any of them; unknown
//! fields are ignored for forward compatibility.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
