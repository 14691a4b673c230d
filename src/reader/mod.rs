//! 試験日程表の読み込み
//!
//! 先頭シート（CSVはファイル全体）の1行目をヘッダーとして、
//! 各行を ヘッダー名 → セル値 の RawRow に変換する。

mod csv_file;
mod workbook;

use crate::error::{ExamTickerError, Result};
use exam_ticker_common::RawRow;
use std::collections::HashMap;
use std::path::Path;

/// 対応するファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFormat {
    /// Excel / OpenDocument（calamine）
    Workbook,
    Csv,
}

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

impl ScheduleFormat {
    /// 拡張子から形式を判定（大文字小文字は無視）
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
            Ok(ScheduleFormat::Workbook)
        } else if ext == "csv" {
            Ok(ScheduleFormat::Csv)
        } else {
            Err(ExamTickerError::UnsupportedFileType(path.display().to_string()))
        }
    }
}

/// 試験日程表を読み込む
///
/// 読み込み・解析に失敗した場合は `Decode` を返し、途中までの行は返さない。
pub fn read_schedule(path: &Path) -> Result<Vec<RawRow>> {
    let format = ScheduleFormat::from_path(path)?;

    if !path.exists() {
        return Err(ExamTickerError::FileNotFound(path.display().to_string()));
    }

    let rows = match format {
        ScheduleFormat::Workbook => workbook::read_workbook(path)?,
        ScheduleFormat::Csv => csv_file::read_csv(path)?,
    };

    log::debug!("{}: {}行を読み込み", path.display(), rows.len());
    Ok(rows)
}

/// ヘッダー行を列ごとのキーに変換
///
/// - 前後の空白は除去
/// - 空のヘッダー列は無視（None）
/// - 重複ヘッダーは2つ目以降に `_1`, `_2`… を付ける
fn build_headers<I>(raw_headers: I) -> Vec<Option<String>>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashMap<String, usize> = HashMap::new();

    raw_headers
        .into_iter()
        .map(|header| {
            let header = header.trim().to_string();
            if header.is_empty() {
                return None;
            }
            let count = seen.entry(header.clone()).or_insert(0);
            let key = if *count == 0 {
                header
            } else {
                format!("{}_{}", header, count)
            };
            *count += 1;
            Some(key)
        })
        .collect()
}

/// 1行分のセルを RawRow にまとめる（全セルが空なら None）
fn build_row<I>(headers: &[Option<String>], cells: I) -> Option<RawRow>
where
    I: IntoIterator<Item = exam_ticker_common::CellValue>,
{
    let mut row = RawRow::new();
    for (header, value) in headers.iter().zip(cells) {
        if let Some(header) = header {
            row.insert(header.clone(), value);
        }
    }

    if row.is_empty() {
        None
    } else {
        Some(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_ticker_common::CellValue;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ScheduleFormat::from_path(Path::new("lich_thi.xlsx")).unwrap(),
            ScheduleFormat::Workbook
        );
        assert_eq!(
            ScheduleFormat::from_path(Path::new("LICH_THI.XLS")).unwrap(),
            ScheduleFormat::Workbook
        );
        assert_eq!(
            ScheduleFormat::from_path(Path::new("schedule.CSV")).unwrap(),
            ScheduleFormat::Csv
        );
        assert!(matches!(
            ScheduleFormat::from_path(Path::new("schedule.pdf")),
            Err(ExamTickerError::UnsupportedFileType(_))
        ));
        assert!(ScheduleFormat::from_path(Path::new("schedule")).is_err());
    }

    #[test]
    fn test_build_headers() {
        let headers = build_headers(
            ["Mã lớp", " Ngày thi ", "", "Mã lớp", "Mã lớp"]
                .iter()
                .map(|s| s.to_string()),
        );
        assert_eq!(
            headers,
            vec![
                Some("Mã lớp".to_string()),
                Some("Ngày thi".to_string()),
                None,
                Some("Mã lớp_1".to_string()),
                Some("Mã lớp_2".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_row_skips_blank() {
        let headers = vec![Some("A".to_string()), None];
        assert!(build_row(&headers, vec![CellValue::Empty, CellValue::from("x")]).is_none());

        let row = build_row(&headers, vec![CellValue::from("1"), CellValue::from("x")]).unwrap();
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("A"), Some(&CellValue::from("1")));
    }
}
