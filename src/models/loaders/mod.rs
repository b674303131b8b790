pub mod json_loader;

pub use json_loader::{load_fragment_sources, scan_fragment_files};
