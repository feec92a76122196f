//! 读取设置文件
//!
//! 文件格式：
//!
//! ```toml
//! [main]
//! proxy_enabled = true
//! proxy_http_url = "http://proxy:8080"
//! proxy_https_url = ""
//! ```

use leo_dict_common::http_client::ProxyConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("read settings file failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid toml: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub main: MainSection,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct MainSection {
    #[serde(default)]
    pub proxy_enabled: bool,
    pub proxy_http_url: Option<String>,
    pub proxy_https_url: Option<String>,
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading settings");
        let file_str = std::fs::read_to_string(path)?;
        Self::from_toml_str(&file_str)
    }

    /// 转换为[ProxyConfig]
    ///
    /// url去掉首尾空白，空字符串视为未设置；未启用代理时不保留url
    pub fn proxy_config(&self) -> ProxyConfig {
        if !self.main.proxy_enabled {
            return ProxyConfig::default();
        }
        ProxyConfig {
            enabled: true,
            http_url: stripped(self.main.proxy_http_url.as_deref()),
            https_url: stripped(self.main.proxy_https_url.as_deref()),
        }
    }
}

fn stripped(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}
