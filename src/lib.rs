pub mod channels;
pub mod config;
pub mod demo;
pub mod dispatcher;
pub mod models;
pub mod utils;
