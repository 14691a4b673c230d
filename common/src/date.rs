//! 試験日の正規化
//!
//! セル値を `DD.MM.YYYY` 形式の文字列に揃える。
//! 受け付ける形式:
//! - 日付書式のセル
//! - `D.M.YYYY` / `D/M/YYYY` / `D-M-YYYY`（区切り文字は混在可）
//! - 上記の2桁年（`20` を前置）
//!
//! 暦の妥当性は検査しない（`31.02.2025` も形が合えば通す）。

use crate::types::CellValue;
use chrono::NaiveDate;
use regex::Regex;

/// 正規化後の形式
pub const CANONICAL_FORMAT: &str = "%d.%m.%Y";

lazy_static::lazy_static! {
    // 数字はASCIIのみ
    static ref FULL_YEAR_RE: Regex = Regex::new(r"^([0-9]{1,2})[./-]([0-9]{1,2})[./-]([0-9]{4})$").unwrap();
    static ref SHORT_YEAR_RE: Regex = Regex::new(r"^([0-9]{1,2})[./-]([0-9]{1,2})[./-]([0-9]{2})$").unwrap();
    static ref CANONICAL_RE: Regex = Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").unwrap();
}

/// 試験日を `DD.MM.YYYY` に正規化する
///
/// 使える日付が無い場合は空文字列を返す（エラーではない）。
pub fn normalize_exam_date(value: &CellValue) -> String {
    let candidate = match value {
        CellValue::Date(date) => date.format(CANONICAL_FORMAT).to_string(),
        CellValue::Text(text) => normalize_date_text(text.trim()),
        _ => String::new(),
    };

    if is_canonical(&candidate) {
        candidate
    } else {
        String::new()
    }
}

/// 文字列の日付を変換（4桁年を先に試す）
fn normalize_date_text(text: &str) -> String {
    if let Some(caps) = FULL_YEAR_RE.captures(text) {
        return format!("{:0>2}.{:0>2}.{}", &caps[1], &caps[2], &caps[3]);
    }
    if let Some(caps) = SHORT_YEAR_RE.captures(text) {
        return format!("{:0>2}.{:0>2}.20{}", &caps[1], &caps[2], &caps[3]);
    }
    String::new()
}

/// `DD.MM.YYYY` 形式か
pub fn is_canonical(date: &str) -> bool {
    CANONICAL_RE.is_match(date)
}

/// 正規化済みの日付文字列を日付に戻す（ソート・残り日数計算用）
///
/// 形式が違う、または暦上存在しない日付は `None`。
pub fn parse_exam_date(date: &str) -> Option<NaiveDate> {
    if !is_canonical(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, CANONICAL_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_structured_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        assert_eq!(normalize_exam_date(&CellValue::Date(date)), "20.06.2025");

        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(normalize_exam_date(&CellValue::Date(date)), "03.01.2025");
    }

    #[test]
    fn test_full_year_separators() {
        assert_eq!(normalize_exam_date(&text("20/6/2025")), "20.06.2025");
        assert_eq!(normalize_exam_date(&text("20.6.2025")), "20.06.2025");
        assert_eq!(normalize_exam_date(&text("20-6-2025")), "20.06.2025");
        assert_eq!(normalize_exam_date(&text("1/2/2026")), "01.02.2026");
        assert_eq!(normalize_exam_date(&text("05.11.2025")), "05.11.2025");
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(normalize_exam_date(&text("3/4-2025")), "03.04.2025");
    }

    #[test]
    fn test_short_year() {
        assert_eq!(normalize_exam_date(&text("20/6/25")), "20.06.2025");
        assert_eq!(normalize_exam_date(&text("1-1-07")), "01.01.2007");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_exam_date(&text("  20/6/2025 \t")), "20.06.2025");
    }

    #[test]
    fn test_unparsable_text() {
        assert_eq!(normalize_exam_date(&text("2025-06-20-extra")), "");
        assert_eq!(normalize_exam_date(&text("2025-06-20")), "");
        assert_eq!(normalize_exam_date(&text("20/6/202")), "");
        assert_eq!(normalize_exam_date(&text("tomorrow")), "");
        assert_eq!(normalize_exam_date(&text("")), "");
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert_eq!(normalize_exam_date(&text("２０/６/２０２５")), "");
        assert_eq!(normalize_exam_date(&text("٢٠/٦/٢٠٢٥")), "");
        assert!(!is_canonical("２０.0６.２０２５"));
        assert_eq!(parse_exam_date("２０.06.2025"), None);
    }

    #[test]
    fn test_non_date_cells() {
        // 日付書式でない数値（シリアル値）は日付として扱わない
        assert_eq!(normalize_exam_date(&CellValue::Number(45828.0)), "");
        assert_eq!(normalize_exam_date(&CellValue::Bool(true)), "");
        assert_eq!(normalize_exam_date(&CellValue::Empty), "");
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(normalize_exam_date(&text("31/2/2025")), "31.02.2025");
    }

    #[test]
    fn test_parse_exam_date() {
        assert_eq!(
            parse_exam_date("20.06.2025"),
            NaiveDate::from_ymd_opt(2025, 6, 20)
        );
        assert_eq!(parse_exam_date("31.02.2025"), None);
        assert_eq!(parse_exam_date("20.6.2025"), None);
        assert_eq!(parse_exam_date(""), None);
    }
}
