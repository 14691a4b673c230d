//! 残り日数・並び替え

use crate::date::parse_exam_date;
use crate::types::ExamRecord;
use chrono::NaiveDate;

/// 「まもなく」とみなす既定の日数
pub const DEFAULT_SOON_THRESHOLD_DAYS: i64 = 7;

/// 試験日の昇順に並べ替え（安定ソート）
///
/// 日付として解釈できないものはUNIXエポック扱いで先頭に来る。
pub fn sort_by_exam_date(exams: &mut [ExamRecord]) {
    exams.sort_by_key(|exam| parse_exam_date(&exam.exam_date).unwrap_or_default());
}

/// 試験日までの残り日数（過去の試験は0）
pub fn days_remaining(exam_date: &str, today: NaiveDate) -> i64 {
    parse_exam_date(exam_date)
        .map(|date| (date - today).num_days().max(0))
        .unwrap_or(0)
}

/// 緊急度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Today,
    Soon,
    Later,
}

impl Urgency {
    pub fn from_days(days: i64, soon_threshold: i64) -> Self {
        if days <= 0 {
            Urgency::Today
        } else if days <= soon_threshold {
            Urgency::Soon
        } else {
            Urgency::Later
        }
    }

    /// カード表示用のバッジ
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Urgency::Today => Some("試験当日!"),
            Urgency::Soon => Some("まもなく!"),
            Urgency::Later => None,
        }
    }
}
