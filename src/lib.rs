pub mod browser;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod model;
pub mod parser;
pub mod query;
pub mod search;
pub mod storage;
pub mod ui;
