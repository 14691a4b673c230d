//! 試験リストファイル（JSON）の読み書き
//!
//! リストはユーザーが指定したファイルにだけ保存する。

use crate::display;
use crate::error::{ExamTickerError, Result};
use dialoguer::Select;
use exam_ticker_common::{ExamList, ExamRecord};
use std::path::Path;

/// リストを読み込む（ファイルが無ければ空のリスト）
pub fn load(path: &Path) -> Result<ExamList> {
    if !path.exists() {
        return Ok(ExamList::new());
    }
    let content = std::fs::read_to_string(path)?;
    let list: ExamList = serde_json::from_str(&content)?;
    Ok(list)
}

/// 既存のリストを読み込む（ファイルが無ければエラー）
pub fn load_existing(path: &Path) -> Result<ExamList> {
    if !path.exists() {
        return Err(ExamTickerError::FileNotFound(path.display().to_string()));
    }
    load(path)
}

pub fn save(path: &Path, list: &ExamList) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(list)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// リストから試験を1件削除して保存
///
/// `id` が無い場合は対話式で選択する。キャンセル時は `Ok(None)`。
pub fn remove_exam(path: &Path, id: Option<&str>) -> Result<Option<ExamRecord>> {
    let mut list = load_existing(path)?;

    let id = match id {
        Some(id) => id.to_string(),
        None => match select_exam_interactive(&list)? {
            Some(id) => id,
            None => return Ok(None),
        },
    };

    let removed = list
        .remove(&id)
        .ok_or_else(|| ExamTickerError::ExamNotFound(id.clone()))?;
    save(path, &list)?;

    Ok(Some(removed))
}

/// 削除対象を対話式で選択
fn select_exam_interactive(list: &ExamList) -> Result<Option<String>> {
    if list.is_empty() {
        println!("リストに試験がありません");
        return Ok(None);
    }

    let labels: Vec<String> = list.exams().iter().map(display::summary_line).collect();

    let selection = Select::new()
        .with_prompt("削除する試験を選択 (Esc: キャンセル)")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|e| ExamTickerError::Prompt(e.to_string()))?;

    Ok(selection.map(|i| list.exams()[i].id.clone()))
}
