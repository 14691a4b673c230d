//! 既存リストとの重複判定・マージ
//!
//! 抽出結果を呼び出し側が保持する試験リストと突き合わせ、
//! id単位で「新規」と「既存と重複」に分ける。

use crate::types::ExamRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// 重複判定結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutcome {
    /// 既存リストに無いレコード（抽出順）
    pub added: Vec<ExamRecord>,
    /// 既存リストと重複した件数
    pub duplicates: usize,
}

/// 抽出結果を新規/重複に分割
pub fn partition_new(found: &[ExamRecord], existing: &[ExamRecord]) -> MergeOutcome {
    let existing_ids: HashSet<&str> = existing.iter().map(|e| e.id.as_str()).collect();
    let mut outcome = MergeOutcome::default();

    for exam in found {
        if existing_ids.contains(exam.id.as_str()) {
            outcome.duplicates += 1;
        } else {
            outcome.added.push(exam.clone());
        }
    }

    outcome
}

/// マージ結果の通知内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSummary {
    /// 新規追加あり
    Added(usize),
    /// 見つかった試験がすべて登録済み
    AllDuplicates(usize),
    /// 一致なし（リストも空）
    NoResults,
    /// 一致なし（既存リストはそのまま）
    NoNewResults,
}

impl MergeSummary {
    /// # Arguments
    /// * `found` - 今回の抽出件数
    /// * `outcome` - 重複判定結果
    /// * `existing_before` - マージ前のリスト件数
    pub fn classify(found: usize, outcome: &MergeOutcome, existing_before: usize) -> Self {
        if !outcome.added.is_empty() {
            MergeSummary::Added(outcome.added.len())
        } else if found > 0 {
            MergeSummary::AllDuplicates(found)
        } else if existing_before == 0 {
            MergeSummary::NoResults
        } else {
            MergeSummary::NoNewResults
        }
    }
}

impl fmt::Display for MergeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeSummary::Added(n) => write!(f, "{}件の試験をリストに追加しました", n),
            MergeSummary::AllDuplicates(n) => {
                write!(f, "見つかった{}件の試験はすべてリストに登録済みです", n)
            }
            MergeSummary::NoResults => write!(
                f,
                "一致する試験が見つかりません。クラスコードと、ファイルの列・日付形式を確認してください"
            ),
            MergeSummary::NoNewResults => {
                write!(f, "追加で一致する試験はありません。既存のリストはそのままです")
            }
        }
    }
}

/// 呼び出し側が保持する試験リスト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamList {
    exams: Vec<ExamRecord>,
}

impl ExamList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exams(&self) -> &[ExamRecord] {
        &self.exams
    }

    pub fn len(&self) -> usize {
        self.exams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exams.is_empty()
    }

    /// 抽出結果をマージし、新規分を末尾に追加
    pub fn merge(&mut self, found: &[ExamRecord]) -> MergeOutcome {
        let outcome = partition_new(found, &self.exams);
        self.exams.extend(outcome.added.iter().cloned());
        outcome
    }

    /// idで削除（削除したレコードを返す）
    pub fn remove(&mut self, id: &str) -> Option<ExamRecord> {
        let pos = self.exams.iter().position(|e| e.id == id)?;
        Some(self.exams.remove(pos))
    }
}

impl From<Vec<ExamRecord>> for ExamList {
    fn from(exams: Vec<ExamRecord>) -> Self {
        Self { exams }
    }
}
