//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `SKILLTRACK__*` 覆盖（双下划线表示嵌套，如 `SKILLTRACK__APP__DATA_FILE=/tmp/skills.csv`）。

use std::path::PathBuf;

use serde::Deserialize;

/// 默认数据文件名（位于用户主目录）
pub const DEFAULT_DATA_FILE: &str = "skilltrack_skills.csv";

/// 默认日志文件名（与数据文件同目录）
pub const DEFAULT_LOG_FILE: &str = "skilltrack.log";

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub ui: UiSection,
}

/// [app] 段：应用名、数据文件、日志文件
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppSection {
    pub name: Option<String>,
    /// 技能 CSV 文件，未设置时用 ~/skilltrack_skills.csv
    pub data_file: Option<PathBuf>,
    /// 日志文件，未设置时放在数据文件旁边
    pub log_file: Option<PathBuf>,
}

/// [ui] 段：终端界面
#[derive(Debug, Clone, Deserialize)]
pub struct UiSection {
    /// 键盘轮询间隔（毫秒）
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    100
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl AppConfig {
    /// 数据文件路径：配置 > 主目录 > 当前目录
    pub fn data_file(&self) -> PathBuf {
        self.app.data_file.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_DATA_FILE)
        })
    }

    /// 日志文件路径：配置 > 数据文件同目录
    pub fn log_file(&self) -> PathBuf {
        self.app.log_file.clone().unwrap_or_else(|| {
            self.data_file()
                .parent()
                .map(|p| p.join(DEFAULT_LOG_FILE))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
        })
    }

    pub fn app_name(&self) -> &str {
        self.app.name.as_deref().unwrap_or("SkillTrack")
    }
}

/// 从 config 目录加载配置，环境变量 SKILLTRACK__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 SKILLTRACK__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("SKILLTRACK")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.ui.tick_ms, 100);
        assert_eq!(cfg.app_name(), "SkillTrack");
        assert!(cfg.data_file().ends_with(DEFAULT_DATA_FILE));
        assert!(cfg.log_file().ends_with(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_explicit_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[app]\ndata_file = \"/tmp/mine.csv\"\n\n[ui]\ntick_ms = 250\n",
        )
        .unwrap();

        let cfg = load_config(Some(path)).unwrap();
        assert_eq!(cfg.data_file(), PathBuf::from("/tmp/mine.csv"));
        assert_eq!(cfg.log_file(), PathBuf::from("/tmp").join(DEFAULT_LOG_FILE));
        assert_eq!(cfg.ui.tick_ms, 250);
    }
}
