pub mod config;
pub mod info;
pub mod keys;
pub mod replay;
