pub mod file;

pub use file::open_input;
