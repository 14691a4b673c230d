//! 行データ・試験レコードの型定義
//!
//! - CellValue: スプレッドシートのセル値（型なし）
//! - RawRow: ヘッダー名 → セル値のマップ（1行分）
//! - ExamRecord: 抽出結果の試験レコード

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 任意フィールドが無い場合の値
pub const NOT_AVAILABLE: &str = "N/A";

/// セル値
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// 日付書式のセル
    Date(NaiveDate),
    #[default]
    Empty,
}

impl CellValue {
    /// 空セルか（空文字列も空とみなす）
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            // 整数値は小数部なしで表示（157324.0 → "157324"）
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Date(d) => write!(f, "{}", d.format("%d.%m.%Y")),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

/// スプレッドシートの1行（ヘッダー名 → セル値）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// セルを追加（空セルは保持しない）
    pub fn insert(&mut self, header: impl Into<String>, value: CellValue) {
        if value.is_empty() {
            return;
        }
        self.cells.insert(header.into(), value);
    }

    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells.get(header)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (header, value) in iter {
            row.insert(header, value);
        }
        row
    }
}

/// 試験レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRecord {
    /// 重複判定・表示用の識別子（全フィールド値 + 行番号）
    pub id: String,
    /// 小文字化・trim済みのクラスコード
    pub class_code: String,
    pub course_name: String,
    /// DD.MM.YYYY
    pub exam_date: String,
    pub group: String,
    pub exam_team: String,
    pub exam_room: String,
}

impl ExamRecord {
    /// レコードを生成し、idを組み立てる
    ///
    /// # Arguments
    /// * `row_index` - デコード後データセット内の行位置（0始まり）
    pub fn new(
        class_code: String,
        course_name: String,
        exam_date: String,
        group: String,
        exam_team: String,
        exam_room: String,
        row_index: usize,
    ) -> Self {
        let id = format!(
            "{}-{}-{}-{}-{}-{}-{}",
            class_code, course_name, exam_date, group, exam_team, exam_room, row_index
        );
        Self {
            id,
            class_code,
            course_name,
            exam_date,
            group,
            exam_team,
            exam_room,
        }
    }

    pub fn has_group(&self) -> bool {
        self.group != NOT_AVAILABLE
    }

    pub fn has_exam_team(&self) -> bool {
        self.exam_team != NOT_AVAILABLE
    }

    pub fn has_exam_room(&self) -> bool {
        self.exam_room != NOT_AVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display_integral_number() {
        assert_eq!(CellValue::Number(157324.0).to_string(), "157324");
        assert_eq!(CellValue::Number(-3.0).to_string(), "-3");
    }

    #[test]
    fn test_cell_display_fractional_number() {
        assert_eq!(CellValue::Number(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_cell_display_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(CellValue::Date(date).to_string(), "05.06.2025");
    }

    #[test]
    fn test_cell_is_empty() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::Text(String::new()).is_empty());
        // 空白のみは空ではない（trimは呼び出し側）
        assert!(!CellValue::Text("  ".to_string()).is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
    }

    #[test]
    fn test_raw_row_skips_empty_cells() {
        let row: RawRow = vec![
            ("Mã lớp", CellValue::from("157324")),
            ("Ca thi", CellValue::Empty),
        ]
        .into_iter()
        .collect();

        assert_eq!(row.len(), 1);
        assert!(row.get("Ca thi").is_none());
    }

    #[test]
    fn test_exam_record_id() {
        let record = ExamRecord::new(
            "157324".to_string(),
            "Intro to Programming".to_string(),
            "20.06.2025".to_string(),
            "N/A".to_string(),
            "2".to_string(),
            "D9-301".to_string(),
            4,
        );
        assert_eq!(record.id, "157324-Intro to Programming-20.06.2025-N/A-2-D9-301-4");
        assert!(!record.has_group());
        assert!(record.has_exam_team());
    }

    #[test]
    fn test_exam_record_serialize_camel_case() {
        let record = ExamRecord::new(
            "157324".to_string(),
            "Intro".to_string(),
            "20.06.2025".to_string(),
            "1".to_string(),
            "N/A".to_string(),
            "N/A".to_string(),
            0,
        );

        let json = serde_json::to_string(&record).expect("シリアライズ失敗");
        assert!(json.contains("\"classCode\":\"157324\""));
        assert!(json.contains("\"examDate\":\"20.06.2025\""));
        assert!(json.contains("\"examTeam\":\"N/A\""));
    }
}
