pub mod config;
pub mod controller;
pub mod message;
pub mod messages;
pub mod profile;
pub mod session;
pub mod transcript;
