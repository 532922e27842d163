pub mod file_utils;

pub use file_utils::read_file_content;
