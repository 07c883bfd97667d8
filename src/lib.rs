pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::DemoConfig;

pub use crate::core::runner::{DemoRunner, OutputFormat};
pub use crate::core::sequence::{generate, SequenceGenerator};
pub use crate::domain::model::{Profile, Report};
pub use crate::utils::error::{DemoError, Result};
