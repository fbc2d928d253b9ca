pub mod catalog;
pub mod config;
pub mod estimator;
pub mod output;
