use crate::domain::model::Table;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Serializes `table` as comma-separated text with a header row.
///
/// The header is written even when the table has no rows.
pub fn to_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.serialize(row)?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Writes `table` to `path`, replacing any existing file.
pub async fn save<S: Storage>(storage: &S, table: &Table, path: &str) -> Result<()> {
    let data = to_csv(table)?;
    tracing::debug!("Writing {} bytes of CSV to {}", data.len(), path);
    storage.write_file(path, &data).await?;

    println!("\n💾  Data saved to '{}'", path);
    println!("    Rows    : {}", table.len());
    println!("    Columns : {:?}", table.columns());
    Ok(())
}
