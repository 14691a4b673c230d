use crate::error::{ExamTickerError, Result};
use exam_ticker_common::countdown::DEFAULT_SOON_THRESHOLD_DAYS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// エイリアスファイルを上書きする環境変数
pub const ALIAS_ENV: &str = "EXAM_TICKER_ALIAS";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 「まもなく」表示にする残り日数
    #[serde(default = "default_soon_threshold_days")]
    pub soon_threshold_days: i64,
    /// カスタムヘッダー別名JSON
    #[serde(default)]
    pub alias_file: Option<PathBuf>,
}

fn default_soon_threshold_days() -> i64 {
    DEFAULT_SOON_THRESHOLD_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            soon_threshold_days: DEFAULT_SOON_THRESHOLD_DAYS,
            alias_file: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ExamTickerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("exam-ticker").join("config.json"))
    }

    /// 使用するエイリアスファイル（CLI指定 > 環境変数 > 設定ファイル）
    pub fn alias_file(&self, cli_override: Option<PathBuf>) -> Option<PathBuf> {
        cli_override
            .or_else(|| std::env::var_os(ALIAS_ENV).map(PathBuf::from))
            .or_else(|| self.alias_file.clone())
    }

    pub fn set_soon_threshold_days(&mut self, days: i64) -> Result<()> {
        if days < 0 {
            return Err(ExamTickerError::Config(format!(
                "日数は0以上を指定してください: {}",
                days
            )));
        }
        self.soon_threshold_days = days;
        self.save()
    }

    pub fn set_alias_file(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(ExamTickerError::FileNotFound(path.display().to_string()));
        }
        self.alias_file = Some(path);
        self.save()
    }
}
