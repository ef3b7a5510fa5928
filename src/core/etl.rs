use crate::core::Pipeline;
use crate::domain::model::Summary;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output_path: String,
    pub summary: Summary,
}

/// Runs fetch, transform, persist and preview in order, stopping at the first failure.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Starting ETL process");

        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", records.len());

        let table = self.pipeline.transform(records);
        let summary = table.summary();
        println!("    Total tasks   : {}", summary.total);
        println!("    Completed     : {}", summary.completed);
        println!("    Pending       : {}", summary.pending);

        let output_path = self.pipeline.load(&table).await?;
        tracing::info!("Output saved to: {}", output_path);

        self.pipeline.preview(&table);

        Ok(RunReport {
            output_path,
            summary,
        })
    }
}
