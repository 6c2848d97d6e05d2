pub mod config;
pub mod fatal;
pub mod logger;
pub mod output;
