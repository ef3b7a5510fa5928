use crate::core::{fetcher, persist, preview, transform};
use crate::core::{ConfigProvider, Pipeline, RawRecord, Storage, Table};
use crate::utils::error::Result;
use reqwest::Client;

/// Fetches one page of todos, tabulates it, saves it as CSV and previews it.
pub struct TodoPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) client: Client,
}

impl<S: Storage, C: ConfigProvider> TodoPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TodoPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawRecord>> {
        let records = fetcher::fetch(
            &self.client,
            self.config.endpoint(),
            &self.config.query_params(),
            self.config.timeout(),
        )
        .await?;
        Ok(records)
    }

    fn transform(&self, records: Vec<RawRecord>) -> Table {
        println!("\n🔧  Processing data...");
        transform::transform(records)
    }

    async fn load(&self, table: &Table) -> Result<String> {
        let path = self.config.output_path();
        persist::save(&self.storage, table, path).await?;
        Ok(path.to_string())
    }

    fn preview(&self, table: &Table) {
        preview::preview(table, self.config.preview_count());
    }
}
