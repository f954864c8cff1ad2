//! Movement histories loaded from CSV, used to seed accounts in tests.
//!
//! The file is expected to have `date`, `amount` and `kind` columns, for
//! example `2024-03-01,500.00,deposit`.

use anyhow::{Context, Result};
use std::fs::File;

use crate::types::Movement;

pub const TEST_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test-data.csv");

/// An iterator over movements from a CSV file.
pub struct MovementReader {
    reader: csv::Reader<File>,
    path: String,
    line_num: usize,
}

impl Iterator for MovementReader {
    type Item = Result<Movement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.deserialize().next().map(|result| {
            self.line_num += 1;
            result.with_context(|| {
                format!(
                    "Failed to parse movement at line {} from: {}",
                    self.line_num + 1,
                    self.path
                )
            })
        })
    }
}

pub fn open_movements(path: &str) -> Result<MovementReader> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path))?;
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    Ok(MovementReader {
        reader,
        path: path.to_string(),
        line_num: 0,
    })
}

/// Reads the whole history, stopping at the first malformed record.
pub fn read_movements_from_file(path: &str) -> Result<Vec<Movement>> {
    open_movements(path)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MovementKind;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn reads_test_data() {
        let movements = read_movements_from_file(TEST_DATA).unwrap();

        assert_eq!(movements.len(), 6);

        assert_eq!(
            movements[0].date(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(movements[0].amount(), dec!(500.00));
        assert_eq!(movements[0].kind(), MovementKind::Deposit);

        assert_eq!(movements[5].amount(), dec!(250.50));
        assert_eq!(movements[5].kind(), MovementKind::Withdrawal);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = open_movements("does-not-exist.csv").err().unwrap();
        assert!(err.to_string().contains("does-not-exist.csv"));
    }
}
