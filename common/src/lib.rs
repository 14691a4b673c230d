//! Exam Ticker Common Library
//!
//! 試験日程表の行データから試験レコードを抽出するコア。
//! ファイル形式のデコードは呼び出し側（CLI）が担当する。

pub mod types;
pub mod alias;
pub mod date;
pub mod error;
pub mod extractor;
pub mod merge;
pub mod countdown;
pub mod export;

pub use types::{CellValue, ExamRecord, RawRow, NOT_AVAILABLE};
pub use alias::{HeaderAliases, LogicalField};
pub use date::{normalize_exam_date, parse_exam_date};
pub use error::{Error, Result};
pub use extractor::{extract_exams, parse_class_codes};
pub use merge::{partition_new, ExamList, MergeOutcome, MergeSummary};
pub use countdown::{days_remaining, sort_by_exam_date, Urgency};
