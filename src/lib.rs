pub mod commands;
pub mod download;
pub mod error;
pub mod http;
pub mod package;
pub mod platform;
pub mod runtime;
