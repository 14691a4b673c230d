//! 試験日程表の検索（読み込み → 抽出）

use crate::error::{ExamTickerError, Result};
use crate::reader;
use exam_ticker_common::{extract_exams, parse_class_codes, ExamRecord, HeaderAliases};
use std::path::Path;

/// 試験日程表からクラスコードに一致する試験を抽出する
///
/// クラスコードが空の場合はファイルを読む前にエラーにする。
/// 読み込みに失敗した場合は結果を一切返さない。
pub fn find_exams(
    schedule: &Path,
    class_codes: &str,
    aliases: &HeaderAliases,
) -> Result<Vec<ExamRecord>> {
    if parse_class_codes(class_codes).is_empty() {
        return Err(ExamTickerError::EmptyClassCodes);
    }

    let rows = reader::read_schedule(schedule)?;
    Ok(extract_exams(&rows, class_codes, aliases))
}
