use crate::domain::model::{RawRecord, Row, Table};

/// Renames the API fields, derives `status` and fixes the column order.
/// Row order and row count follow `records` exactly.
pub fn transform(records: Vec<RawRecord>) -> Table {
    Table::new(records.into_iter().map(Row::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Status;

    fn records(completed: &[bool]) -> Vec<RawRecord> {
        completed
            .iter()
            .enumerate()
            .map(|(i, &done)| RawRecord {
                user_id: (i as i64) / 10 + 1,
                id: i as i64 + 1,
                title: format!("todo {}", i + 1),
                completed: done,
            })
            .collect()
    }

    #[test]
    fn test_transform_single_record() {
        let table = transform(vec![RawRecord {
            user_id: 1,
            id: 1,
            title: "A".to_string(),
            completed: true,
        }]);

        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];
        assert_eq!(row.todo_id, 1);
        assert_eq!(row.user_id, 1);
        assert_eq!(row.task, "A");
        assert!(row.is_completed);
        assert_eq!(row.status, Status::Done);
    }

    #[test]
    fn test_transform_preserves_order_and_count() {
        let input = records(&[false, true, false, true, true]);
        let ids: Vec<i64> = input.iter().map(|r| r.id).collect();

        let table = transform(input);

        assert_eq!(table.len(), 5);
        let out_ids: Vec<i64> = table.rows().iter().map(|r| r.todo_id).collect();
        assert_eq!(out_ids, ids);
    }

    #[test]
    fn test_status_matches_completion() {
        let table = transform(records(&[true, false, true, false]));
        for row in table.rows() {
            let expected = if row.is_completed {
                Status::Done
            } else {
                Status::Pending
            };
            assert_eq!(row.status, expected);
        }
    }

    #[test]
    fn test_summary_counts_add_up() {
        for pattern in [
            vec![],
            vec![true],
            vec![false],
            vec![true, true, false],
            vec![false; 20],
        ] {
            let summary = transform(records(&pattern)).summary();
            assert_eq!(summary.total, pattern.len());
            assert_eq!(summary.completed, pattern.iter().filter(|&&c| c).count());
            assert_eq!(summary.completed + summary.pending, summary.total);
        }
    }

    #[test]
    fn test_transform_empty_keeps_columns() {
        let table = transform(vec![]);
        assert!(table.is_empty());
        assert_eq!(
            table.columns(),
            &["todo_id", "user_id", "task", "is_completed", "status"]
        );
    }
}
