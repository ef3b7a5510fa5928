pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::pipelines::todo_pipeline::TodoPipeline;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use crate::core::etl::{EtlEngine, RunReport};
pub use crate::utils::error::{EtlError, FetchError, Result};
