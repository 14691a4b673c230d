//! 試験レコード抽出
//!
//! ## 処理フロー
//! 1. クラスコード文字列を分割（カンマ区切り、trim、小文字化）
//! 2. 各行の論理フィールドを別名テーブルで解決
//! 3. 試験日を正規化
//! 4. 条件を満たす行だけをレコード化（同一クラスコードは最初の行のみ）

use crate::alias::{HeaderAliases, LogicalField};
use crate::date::normalize_exam_date;
use crate::types::{CellValue, ExamRecord, RawRow, NOT_AVAILABLE};
use std::collections::HashSet;

/// クラスコード文字列を対象コードの集合に変換
///
/// 空トークンはどの行にも一致しないので除外する。
pub fn parse_class_codes(input: &str) -> HashSet<String> {
    input
        .split(',')
        .map(|code| code.trim().to_lowercase())
        .filter(|code| !code.is_empty())
        .collect()
}

/// セル値を表示形式にしてtrim（空なら None）
fn resolve_text(aliases: &HeaderAliases, row: &RawRow, field: LogicalField) -> Option<String> {
    aliases
        .resolve(row, field)
        .map(|value| value.to_string().trim().to_string())
        .filter(|value| !value.is_empty())
}

/// 任意フィールド（無ければ "N/A"）
fn optional_text(aliases: &HeaderAliases, row: &RawRow, field: LogicalField) -> String {
    resolve_text(aliases, row, field).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// 行データから対象クラスコードの試験レコードを抽出する
///
/// # Arguments
/// * `rows` - デコード済みの行（元の順序）
/// * `class_codes` - カンマ区切りのクラスコード
/// * `aliases` - ヘッダー別名テーブル
///
/// # Returns
/// 元の行順のレコード列。1つのクラスコードにつき最初の行のみ採用する。
/// 試験日が使えない行はレコード化せず、診断ログだけ出す。
pub fn extract_exams(
    rows: &[RawRow],
    class_codes: &str,
    aliases: &HeaderAliases,
) -> Vec<ExamRecord> {
    let targets = parse_class_codes(class_codes);
    let mut found_codes: HashSet<String> = HashSet::new();
    let mut exams = Vec::new();

    if targets.is_empty() {
        return exams;
    }

    for (row_index, row) in rows.iter().enumerate() {
        let class_code = match resolve_text(aliases, row, LogicalField::ClassCode) {
            Some(code) => code.to_lowercase(),
            None => continue,
        };
        if !targets.contains(&class_code) {
            continue;
        }
        let course_name = match resolve_text(aliases, row, LogicalField::CourseName) {
            Some(name) => name,
            None => continue,
        };

        let raw_date = aliases.resolve(row, LogicalField::ExamDate);
        let exam_date = raw_date.map(normalize_exam_date).unwrap_or_default();
        if exam_date.is_empty() {
            log::warn!(
                "Row {}: クラス {}（{}）の試験日が無いか解釈できないためスキップ: '{}'",
                row_index + 2,
                class_code,
                course_name,
                raw_date.map(CellValue::to_string).unwrap_or_default()
            );
            continue;
        }

        // 同一検索内では最初に見つかった行のみ
        if found_codes.contains(&class_code) {
            log::debug!("Row {}: クラス {} は既に見つかっているため無視", row_index + 2, class_code);
            continue;
        }

        let record = ExamRecord::new(
            class_code.clone(),
            course_name,
            exam_date,
            optional_text(aliases, row, LogicalField::Group),
            optional_text(aliases, row, LogicalField::ExamTeam),
            optional_text(aliases, row, LogicalField::ExamRoom),
            row_index,
        );
        found_codes.insert(class_code);
        exams.push(record);
    }

    log::debug!("{}行から{}件の試験を抽出", rows.len(), exams.len());
    exams
}
