pub mod filesystem;
pub mod storage;
