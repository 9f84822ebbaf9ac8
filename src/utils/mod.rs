pub mod environment;
pub mod paths;

pub use environment::get_claude_dir;
pub use paths::{encode_path, validate_file_size, validate_project_path};
