pub mod cli;
pub mod toml_config;

use crate::core::preview::DEFAULT_PREVIEW_ROWS;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";
pub const LIMIT_PARAM: &str = "_limit";
pub const DEFAULT_LIMIT: usize = 20;
pub const DEFAULT_OUTPUT_PATH: &str = "todos.csv";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-etl")]
#[command(about = "Fetch a page of todos, save them as CSV and preview the table")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Page size, sent as the `_limit` query parameter
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Extra query parameter as key=value; may be repeated
    #[arg(long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_count: usize,

    /// Upper bound on the whole request, connect and read included
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_secs: u64,

    /// Load settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![(LIMIT_PARAM.to_string(), self.limit.to_string())];
        params.extend(self.params.iter().cloned());
        params
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn preview_count(&self) -> usize {
        self.preview_count
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_positive_number("limit", self.limit, 1)?;
        validation::validate_query_params("param", &self.params)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_range("timeout_secs", self.timeout_secs, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}
