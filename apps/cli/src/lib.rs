pub mod config;
pub mod main_lib;
pub mod provider;
pub mod report;

pub use main_lib::{build_report, init_tracing, run};
