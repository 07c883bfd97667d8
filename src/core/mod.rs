pub mod calculator;
pub mod collections;
pub mod runner;
pub mod sections;
pub mod sequence;

pub use crate::domain::model::{Profile, Report, SectionOutput};
pub use crate::domain::ports::{ConfigProvider, Section};
pub use crate::utils::error::Result;
