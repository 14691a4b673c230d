//! CSVの読み込み
//!
//! CSVのセルはすべて文字列として扱う（日付も文字列のまま正規化に回す）。

use super::{build_headers, build_row};
use crate::error::{ExamTickerError, Result};
use exam_ticker_common::{CellValue, RawRow};
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

pub fn read_csv(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| ExamTickerError::Decode(format!("{}: {}", path.display(), e)))?;

    let headers = build_headers(
        reader
            .headers()
            .map_err(|e| ExamTickerError::Decode(format!("{}: ヘッダー行: {}", path.display(), e)))?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    h.to_string()
                }
            }),
    );

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            ExamTickerError::Decode(format!("{}: {}行目: {}", path.display(), line + 2, e))
        })?;

        if let Some(row) = build_row(&headers, record.iter().map(CellValue::from)) {
            rows.push(row);
        }
    }

    Ok(rows)
}
