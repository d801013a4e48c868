pub mod tools;

pub use self::tools::{pools_footprint, show_rust_core_dependencies};
