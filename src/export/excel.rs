//! Excel生成（CLI版）
//!
//! 共通ライブラリのexcel_coreでバッファを作り、ファイルに書き出す。

use crate::error::{ExamTickerError, Result};
use chrono::NaiveDate;
use exam_ticker_common::export::excel_core;
use exam_ticker_common::ExamRecord;
use std::path::Path;

pub const DEFAULT_TITLE: &str = "試験カウントダウン";

pub fn generate_excel(
    exams: &[ExamRecord],
    output_path: &Path,
    today: NaiveDate,
    title: &str,
) -> Result<()> {
    let buffer = excel_core::generate_excel_buffer(exams, today, title)
        .map_err(ExamTickerError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)
        .map_err(|e| ExamTickerError::ExcelGeneration(format!("ファイル書き込みエラー: {}", e)))?;

    Ok(())
}
