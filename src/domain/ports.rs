use crate::domain::model::{RawRecord, Table};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    /// Creates or truncates `path` and writes `data` in full.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn query_params(&self) -> Vec<(String, String)>;
    fn timeout(&self) -> Duration;
    fn output_path(&self) -> &str;
    fn preview_count(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawRecord>>;
    fn transform(&self, records: Vec<RawRecord>) -> Table;
    async fn load(&self, table: &Table) -> Result<String>;
    fn preview(&self, table: &Table);
}
