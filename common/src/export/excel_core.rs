//! Excel生成（共通ライブラリ）
//!
//! 試験リストを1シートの一覧表としてバッファに書き出す。

use crate::countdown::{days_remaining, sort_by_exam_date};
use crate::types::ExamRecord;
use chrono::NaiveDate;
use rust_xlsxwriter::*;

/// シート名
pub const SHEET_NAME: &str = "試験日程";

/// 列定義（見出し, 列幅）
const COLUMNS: [(&str, f64); 7] = [
    ("クラスコード", 14.0),
    ("科目名", 36.0),
    ("試験日", 12.0),
    ("残り日数", 10.0),
    ("組", 8.0),
    ("試験チーム", 12.0),
    ("試験室", 12.0),
];

/// 見出し行（タイトル行の次）
const HEADER_ROW: u32 = 1;

/// Excelをバッファに生成
///
/// # Arguments
/// * `exams` - 試験レコード（試験日順に並べ替えて出力する）
/// * `today` - 残り日数の基準日
/// * `title` - 1行目に書くタイトル
pub fn generate_excel_buffer(
    exams: &[ExamRecord],
    today: NaiveDate,
    title: &str,
) -> Result<Vec<u8>, String> {
    let mut sorted = exams.to_vec();
    sort_by_exam_date(&mut sorted);

    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold().set_font_size(14.0);

    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_font_size(11.0)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    worksheet.write_string_with_format(0, 0, title, &title_format)
        .map_err(|e| format!("タイトル書き込みエラー: {}", e))?;

    for (col, (label, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, *width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        worksheet.write_string_with_format(HEADER_ROW, col, *label, &header_format)
            .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
    }

    for (i, exam) in sorted.iter().enumerate() {
        let row = HEADER_ROW + 1 + i as u32;
        let days = days_remaining(&exam.exam_date, today);

        let texts = [
            (0u16, exam.class_code.as_str()),
            (1, exam.course_name.as_str()),
            (2, exam.exam_date.as_str()),
            (4, exam.group.as_str()),
            (5, exam.exam_team.as_str()),
            (6, exam.exam_room.as_str()),
        ];
        for (col, value) in texts {
            worksheet.write_string_with_format(row, col, value, &value_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }
        worksheet.write_number_with_format(row, 3, days as f64, &value_format)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
    }

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
