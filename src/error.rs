use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExamTickerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していないファイル形式です: {0}（.xlsx / .xls / .ods / .csv を指定してください）")]
    UnsupportedFileType(String),

    #[error("ファイルを解析できませんでした: {0}。有効なExcel/CSVで、「Mã lớp」「Tên học phần」「Ngày thi」などの列があるか確認して再試行してください")]
    Decode(String),

    #[error("クラスコードを入力してください（例: 157324, 158785）")]
    EmptyClassCodes,

    #[error("試験が見つかりません: {0}")]
    ExamNotFound(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] exam_ticker_common::Error),
}

pub type Result<T> = std::result::Result<T, ExamTickerError>;
