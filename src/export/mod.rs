pub mod excel;

use std::path::{Path, PathBuf};

/// 出力先を決定（未指定ならリストと同じ場所の .xlsx）
pub fn output_path_for_list(list_path: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => {
            let stem = list_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("exams");
            path.join(format!("{}.xlsx", stem))
        }
        Some(path) => path.to_path_buf(),
        None => list_path.with_extension("xlsx"),
    }
}
