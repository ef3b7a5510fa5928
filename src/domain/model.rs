use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Column names of the output table, in output order.
pub const COLUMNS: [&str; 5] = ["todo_id", "user_id", "task", "is_completed", "status"];

/// One todo object as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Done,
    Pending,
}

impl From<bool> for Status {
    fn from(is_completed: bool) -> Self {
        if is_completed {
            Status::Done
        } else {
            Status::Pending
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Done => f.write_str("Done"),
            Status::Pending => f.write_str("Pending"),
        }
    }
}

/// Field order here is the column order of [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub todo_id: i64,
    pub user_id: i64,
    pub task: String,
    #[serde(serialize_with = "serialize_bool_title_case")]
    pub is_completed: bool,
    pub status: Status,
}

impl Row {
    /// Cell values as displayed text, in column order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.todo_id.to_string(),
            self.user_id.to_string(),
            self.task.clone(),
            bool_label(self.is_completed).to_string(),
            self.status.to_string(),
        ]
    }
}

impl From<RawRecord> for Row {
    fn from(raw: RawRecord) -> Self {
        Self {
            todo_id: raw.id,
            user_id: raw.user_id,
            task: raw.title,
            is_completed: raw.completed,
            status: Status::from(raw.completed),
        }
    }
}

pub fn bool_label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn serialize_bool_title_case<S: Serializer>(
    value: &bool,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(bool_label(*value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Rows of one run, in the order the API returned them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `min(n, len)` rows.
    pub fn head(&self, n: usize) -> &[Row] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn summary(&self) -> Summary {
        let total = self.rows.len();
        let completed = self.rows.iter().filter(|r| r.is_completed).count();
        Summary {
            total,
            completed,
            pending: total - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: i64, completed: bool) -> RawRecord {
        RawRecord {
            user_id: 1,
            id,
            title: format!("task {}", id),
            completed,
        }
    }

    #[test]
    fn test_raw_record_deserializes_wire_names() {
        let json = r#"{"userId": 3, "id": 7, "title": "walk", "completed": false, "extra": 1}"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.user_id, 3);
        assert_eq!(record.id, 7);
        assert_eq!(record.title, "walk");
        assert!(!record.completed);
    }

    #[test]
    fn test_raw_record_missing_field_is_error() {
        let json = r#"{"userId": 3, "id": 7, "title": "walk"}"#;
        assert!(serde_json::from_str::<RawRecord>(json).is_err());
    }

    #[test]
    fn test_row_from_raw_record() {
        let row = Row::from(raw(4, true));
        assert_eq!(row.todo_id, 4);
        assert_eq!(row.user_id, 1);
        assert_eq!(row.task, "task 4");
        assert!(row.is_completed);
        assert_eq!(row.status, Status::Done);
        assert_eq!(row.cells(), ["4", "1", "task 4", "True", "Done"].map(String::from));
    }

    #[test]
    fn test_head_clamps_to_len() {
        let table = Table::new(vec![Row::from(raw(1, true)), Row::from(raw(2, false))]);
        assert_eq!(table.head(5).len(), 2);
        assert_eq!(table.head(1)[0].todo_id, 1);
        assert!(Table::default().head(5).is_empty());
    }

    #[test]
    fn test_summary_of_empty_table() {
        assert_eq!(Table::default().summary(), Summary::default());
        assert_eq!(Table::default().columns(), &COLUMNS);
    }
}
