pub mod file;
pub mod traits;

// Re-export
pub use file::{data_dir, FileConfigRepository};
pub use traits::ConfigRepository;
