//! 配置服务

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notes_sync_core::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notes-sync")
}

/// 默认笔记目录
fn default_notes_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notes-sync")
        .join("notes")
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

const fn default_preload_pages() -> usize {
    1
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Directory holding one `.txt` file per note
    #[serde(default = "default_notes_dir")]
    pub notes_dir: PathBuf,
    /// Notes requested per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Pages requested as soon as a listing arrives
    #[serde(default = "default_preload_pages")]
    pub preload_pages: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notes_dir: default_notes_dir(),
            page_size: default_page_size(),
            preload_pages: default_preload_pages(),
        }
    }
}

impl AppConfig {
    /// Replace values the engine cannot work with by their defaults.
    #[must_use]
    pub fn validated(mut self) -> Self {
        if self.page_size == 0 {
            log::warn!(
                "Page size 0 is not allowed, falling back to {}",
                DEFAULT_PAGE_SIZE
            );
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.preload_pages == 0 {
            log::warn!("Preload pages 0 is not allowed, falling back to 1");
            self.preload_pages = default_preload_pages();
        }
        self
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认位置：`<config_dir>/notes-sync/config.json`
    pub fn new() -> Self {
        Self {
            path: get_config_dir().join("config.json"),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(config.validated())
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
