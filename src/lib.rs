pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod scroll;
pub mod session;
pub mod store;
pub mod view;
