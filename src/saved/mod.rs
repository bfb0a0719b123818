pub mod storage;
pub mod types;

pub use storage::{get_saved_path, load_saved, save_saved};
pub use types::{SavedConfiguration, SavedStore};
