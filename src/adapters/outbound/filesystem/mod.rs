/// Filesystem adapters for reading dependency lists
mod file_reader;

pub use file_reader::{parse_dependency_list, FileSystemReader, DEPENDENCIES_FILENAME};
