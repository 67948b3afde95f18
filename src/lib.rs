pub mod cli;
pub mod config;
pub mod crd;
pub mod error;
pub mod manager;
pub mod report;
pub mod rest;
pub mod scheme;

pub use error::{Error, Result};
