//! ターミナル向けの試験カード表示

use chrono::NaiveDate;
use exam_ticker_common::{days_remaining, sort_by_exam_date, ExamRecord, Urgency};

/// 1行の概要（選択肢表示用）
pub fn summary_line(exam: &ExamRecord) -> String {
    format!("{}  {}  [{}]", exam.exam_date, exam.course_name, exam.class_code)
}

/// 試験カードを文字列にする
///
/// 組・試験チーム・試験室は値がある場合のみ表示。
pub fn render_card(exam: &ExamRecord, today: NaiveDate, soon_threshold: i64) -> String {
    let days = days_remaining(&exam.exam_date, today);
    let urgency = Urgency::from_days(days, soon_threshold);

    let mut lines = vec![
        format!("📘 {}", exam.course_name),
        format!("   試験日: {}", exam.exam_date),
        format!("   残り {} 日", days),
    ];
    if let Some(badge) = urgency.badge() {
        lines.push(format!("   ⚠ {}", badge));
    }

    lines.push(format!("   クラスコード: {}", exam.class_code));
    if exam.has_group() {
        lines.push(format!("   組: {}", exam.group));
    }
    if exam.has_exam_team() {
        lines.push(format!("   試験チーム: {}", exam.exam_team));
    }
    if exam.has_exam_room() {
        lines.push(format!("   試験室: {}", exam.exam_room));
    }
    lines.push(format!("   id: {}", exam.id));

    lines.join("\n")
}

/// 試験日順にカードを表示
pub fn print_cards(exams: &[ExamRecord], today: NaiveDate, soon_threshold: i64) {
    let mut sorted = exams.to_vec();
    sort_by_exam_date(&mut sorted);

    for exam in &sorted {
        println!("{}\n", render_card(exam, today, soon_threshold));
    }
}
