pub mod generator;
pub mod invocation;
pub mod templates;
