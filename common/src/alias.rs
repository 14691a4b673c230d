//! ヘッダー別名（シノニム）モジュール
//!
//! 試験日程表の列名はベトナム語/英語、大文字/小文字で揺れるため、
//! 論理フィールドごとに候補ヘッダーを優先順に持ち、最初に値がある列を採用する。

use crate::error::{Error, Result};
use crate::types::{CellValue, RawRow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 論理フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    ClassCode,
    CourseName,
    ExamDate,
    Group,
    ExamTeam,
    ExamRoom,
}

impl LogicalField {
    pub const ALL: [LogicalField; 6] = [
        LogicalField::ClassCode,
        LogicalField::CourseName,
        LogicalField::ExamDate,
        LogicalField::Group,
        LogicalField::ExamTeam,
        LogicalField::ExamRoom,
    ];
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalField::ClassCode => write!(f, "classCode"),
            LogicalField::CourseName => write!(f, "courseName"),
            LogicalField::ExamDate => write!(f, "examDate"),
            LogicalField::Group => write!(f, "group"),
            LogicalField::ExamTeam => write!(f, "examTeam"),
            LogicalField::ExamRoom => write!(f, "examRoom"),
        }
    }
}

/// ヘッダー別名テーブル
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderAliases {
    #[serde(default)]
    pub class_code: Vec<String>,
    #[serde(default)]
    pub course_name: Vec<String>,
    #[serde(default)]
    pub exam_date: Vec<String>,
    #[serde(default)]
    pub group: Vec<String>,
    #[serde(default)]
    pub exam_team: Vec<String>,
    #[serde(default)]
    pub exam_room: Vec<String>,
}

fn owned(headers: &[&str]) -> Vec<String> {
    headers.iter().map(|h| h.to_string()).collect()
}

impl HeaderAliases {
    /// 組み込みテーブル
    ///
    /// 「Nhóm」「Kíp thi」は旧形式の日程表のみで使われるため末尾に置く。
    pub fn builtin() -> Self {
        Self {
            class_code: owned(&["Mã lớp", "mã lớp", "Class code", "class code"]),
            course_name: owned(&["Tên học phần", "tên học phần", "Course name", "course name"]),
            exam_date: owned(&["Ngày thi", "ngày thi", "Exam date", "exam date"]),
            group: owned(&[
                "Ca thi", "ca thi", "Exam Group", "exam group", "Group", "group", "Nhóm",
            ]),
            exam_team: owned(&["Tổ thi", "tổ thi", "Exam Team", "exam team", "Kíp thi"]),
            exam_room: owned(&["Phòng thi", "phòng thi", "Exam Room", "exam room"]),
        }
    }

    /// 組み込みテーブルにカスタム別名ファイルを追加
    pub fn with_custom_file(path: Option<&std::path::Path>) -> Result<Self> {
        let mut aliases = Self::builtin();
        if let Some(path) = path {
            let custom = Self::from_file(path)?;
            aliases.merge(&custom);
        }
        Ok(aliases)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    ///
    /// 空白だけの別名があれば `Error::Config`。
    pub fn from_json(json: &str) -> Result<Self> {
        let aliases: Self = serde_json::from_str(json)?;
        for field in LogicalField::ALL {
            if aliases.headers(field).iter().any(|h| h.trim().is_empty()) {
                return Err(Error::Config(format!("{} に空の別名があります", field)));
            }
        }
        Ok(aliases)
    }

    /// フィールドの候補ヘッダー（優先順）
    pub fn headers(&self, field: LogicalField) -> &[String] {
        match field {
            LogicalField::ClassCode => &self.class_code,
            LogicalField::CourseName => &self.course_name,
            LogicalField::ExamDate => &self.exam_date,
            LogicalField::Group => &self.group,
            LogicalField::ExamTeam => &self.exam_team,
            LogicalField::ExamRoom => &self.exam_room,
        }
    }

    fn headers_mut(&mut self, field: LogicalField) -> &mut Vec<String> {
        match field {
            LogicalField::ClassCode => &mut self.class_code,
            LogicalField::CourseName => &mut self.course_name,
            LogicalField::ExamDate => &mut self.exam_date,
            LogicalField::Group => &mut self.group,
            LogicalField::ExamTeam => &mut self.exam_team,
            LogicalField::ExamRoom => &mut self.exam_room,
        }
    }

    /// 設定をマージ（既存の候補が優先、後から追加した候補は末尾）
    pub fn merge(&mut self, other: &HeaderAliases) {
        for field in LogicalField::ALL {
            let extra: Vec<String> = other.headers(field).to_vec();
            let target = self.headers_mut(field);
            for header in extra {
                if !target.contains(&header) {
                    target.push(header);
                }
            }
        }
    }

    /// 行から論理フィールドの値を取得
    ///
    /// 候補ヘッダーを順に調べ、最初の空でない値を返す。
    /// どの列にも値が無ければ `None`。
    pub fn resolve<'a>(&self, row: &'a RawRow, field: LogicalField) -> Option<&'a CellValue> {
        self.headers(field)
            .iter()
            .filter_map(|header| row.get(header))
            .find(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, CellValue)]) -> RawRow {
        cells.iter().cloned().collect()
    }

    #[test]
    fn test_resolve_vietnamese_header() {
        let aliases = HeaderAliases::builtin();
        let r = row(&[("Mã lớp", CellValue::from("157324"))]);
        assert_eq!(
            aliases.resolve(&r, LogicalField::ClassCode),
            Some(&CellValue::from("157324"))
        );
    }

    #[test]
    fn test_resolve_priority_order() {
        let aliases = HeaderAliases::builtin();
        let r = row(&[
            ("class code", CellValue::from("later")),
            ("Class code", CellValue::from("first")),
        ]);
        assert_eq!(
            aliases.resolve(&r, LogicalField::ClassCode),
            Some(&CellValue::from("first"))
        );
    }

    #[test]
    fn test_resolve_skips_empty_text() {
        let aliases = HeaderAliases::builtin();
        let mut r = RawRow::new();
        r.insert("Group", CellValue::from("3"));
        // 空文字列はinsertで落ちるので、値がある次の候補が採用される
        r.insert("Ca thi", CellValue::from(""));
        assert_eq!(aliases.resolve(&r, LogicalField::Group), Some(&CellValue::from("3")));
    }

    #[test]
    fn test_resolve_legacy_headers() {
        let aliases = HeaderAliases::builtin();
        let r = row(&[
            ("Nhóm", CellValue::from("02")),
            ("Kíp thi", CellValue::Number(1.0)),
        ]);
        assert_eq!(aliases.resolve(&r, LogicalField::Group), Some(&CellValue::from("02")));
        assert_eq!(
            aliases.resolve(&r, LogicalField::ExamTeam),
            Some(&CellValue::Number(1.0))
        );
    }

    #[test]
    fn test_resolve_missing() {
        let aliases = HeaderAliases::builtin();
        let r = row(&[("Unrelated", CellValue::from("x"))]);
        for field in LogicalField::ALL {
            assert!(aliases.resolve(&r, field).is_none(), "{} should be absent", field);
        }
    }

    #[test]
    fn test_merge_custom_aliases() {
        let mut aliases = HeaderAliases::builtin();
        let custom = HeaderAliases::from_json(r#"{"examRoom": ["Room", "Phòng thi"]}"#).unwrap();
        aliases.merge(&custom);

        let rooms = aliases.headers(LogicalField::ExamRoom);
        assert_eq!(rooms.first().map(String::as_str), Some("Phòng thi"));
        assert_eq!(rooms.last().map(String::as_str), Some("Room"));
        // 重複は追加されない
        assert_eq!(rooms.iter().filter(|h| h.as_str() == "Phòng thi").count(), 1);
    }

    #[test]
    fn test_custom_alias_lower_priority() {
        let mut aliases = HeaderAliases::builtin();
        aliases.merge(&HeaderAliases::from_json(r#"{"courseName": ["Subject"]}"#).unwrap());

        let r = row(&[
            ("Subject", CellValue::from("custom")),
            ("Course name", CellValue::from("builtin")),
        ]);
        assert_eq!(
            aliases.resolve(&r, LogicalField::CourseName),
            Some(&CellValue::from("builtin"))
        );
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(HeaderAliases::from_json("{ invalid }").is_err());
    }

    #[test]
    fn test_from_json_blank_alias() {
        let err = HeaderAliases::from_json(r#"{"examRoom": ["Room", "  "]}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "Config error: examRoom に空の別名があります");
    }
}
