//! numword 配置模块
//!
//! 默认语言与编码选项，从 ~/.config/numword/config.toml 加载

use crate::encoder::EncodeOptions;
use crate::engine::NumWordEngine;
use crate::error::{NumWordError, NumWordResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// numword 完整配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumWordConfig {
    /// 默认语言标签
    pub lang: String,
    /// 默认编码选项
    pub options: EncodeOptions,
}

impl Default for NumWordConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            options: EncodeOptions::default(),
        }
    }
}

impl NumWordConfig {
    /// 加载配置文件，不存在时使用默认配置
    pub fn load() -> NumWordResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("Config file not found, using defaults: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// 从指定路径加载配置文件
    pub fn load_from(path: &Path) -> NumWordResult<Self> {
        if !path.exists() {
            return Err(NumWordError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| NumWordError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("Loaded config: {:?} (lang={})", path, config.lang);
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> NumWordResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> NumWordResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| NumWordError::ConfigSerialize(e.to_string()))?;
        std::fs::write(path, content)?;

        tracing::info!("Saved config: {:?}", path);
        Ok(())
    }

    /// 按配置创建引擎，`overrides` 中已设置的选项优先
    pub fn engine(&self, overrides: EncodeOptions) -> NumWordEngine {
        NumWordEngine::from_tag(&self.lang, overrides.merged_over(self.options))
    }

    /// 获取配置文件路径
    pub fn config_path() -> NumWordResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(NumWordError::ConfigDirUnavailable)?;

        Ok(config_dir.join("numword").join("config.toml"))
    }
}
