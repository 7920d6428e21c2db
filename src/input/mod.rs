pub mod format;

pub mod file;
