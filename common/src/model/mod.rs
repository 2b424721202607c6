pub mod column;
pub mod file_format;
pub mod options;
pub mod schema;
