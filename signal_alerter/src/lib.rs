pub mod alert;
pub mod batch;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod notify;
pub mod obs;
pub mod providers;
pub mod signal;
