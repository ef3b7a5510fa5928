pub mod etl;
pub mod fetcher;
pub mod persist;
pub mod preview;
pub mod transform;

pub use crate::domain::model::{RawRecord, Row, Summary, Table};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
