pub mod config;
pub mod github;
pub mod http;
pub mod release;
pub mod server;
