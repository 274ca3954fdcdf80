pub mod config;
pub mod file;
pub mod helpers;
pub mod naming;
