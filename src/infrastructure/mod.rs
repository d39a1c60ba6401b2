//! Host environment adapters.
//!
//! - [`paths`]: Sandbox filesystem locations

pub mod paths;

pub use paths::{get_data_dir, resolve_host_path};
