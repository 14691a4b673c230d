//! Excel / OpenDocument の読み込み（calamine）

use super::{build_headers, build_row};
use crate::error::{ExamTickerError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;
use exam_ticker_common::{CellValue, RawRow};
use std::path::Path;

pub fn read_workbook(path: &Path) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ExamTickerError::Decode(format!("{}: {}", path.display(), e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ExamTickerError::Decode(format!("{}: シートがありません", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ExamTickerError::Decode(format!("{} ({}): {}", path.display(), sheet_name, e)))?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => build_headers(header_row.iter().map(|c| cell_to_value(c).to_string())),
        None => return Ok(Vec::new()),
    };

    Ok(rows
        .filter_map(|cells| build_row(&headers, cells.iter().map(cell_to_value)))
        .collect())
}

/// calamineのセルをセル値に変換
fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) if !dt.is_duration() => dt
            .as_datetime()
            .map(|d| CellValue::Date(d.date()))
            .unwrap_or(CellValue::Empty),
        Data::DateTimeIso(s) => parse_iso_date(s)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        // 経過時間・エラーセル・空セル
        _ => CellValue::Empty,
    }
}

/// ISO 8601 の日付部分（YYYY-MM-DD）を取り出す
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    s.get(..10)
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
}
