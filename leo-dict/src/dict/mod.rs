//! 词典查询
//!
//! 一个[`Client`]可以在多个任务之间共享，修改代理时整体替换内部的http client，
//! 正在进行的请求继续使用旧的client

use bon::bon;
use leo_dict_common::http_client::{HttpClient, ProxyConfig, build_client};
use std::sync::{PoisonError, RwLock};
use tracing::info;

mod error;
pub use error::Error;

mod parse;
pub use parse::{SourceSide, parse_translation};

#[cfg(feature = "suggest")]
mod suggest;
#[cfg(feature = "suggest")]
pub use suggest::parse_suggestions;

mod trans;
mod types_rs;
pub use types_rs::*;

pub(crate) mod utils;

pub const DEFAULT_HOST: &str = "http://dict.leo.org";

pub struct Client {
    http_client: RwLock<HttpClient>,
    host: String,
}

#[bon]
impl Client {
    #[builder(on(String, into))]
    pub fn new(
        /// 默认为`http://dict.leo.org`，末尾的`/`会被去掉
        #[builder(default = DEFAULT_HOST.to_owned())]
        host: String,
        /// 不设置或`enabled == false`时直连
        proxy: Option<ProxyConfig>,
    ) -> Self {
        Self {
            http_client: RwLock::new(build_client(proxy.as_ref())),
            host: host.trim_end_matches('/').to_owned(),
        }
    }

    /// 重新构建http client并替换当前的client，`None`表示直连
    pub fn configure_proxy(&self, proxy: Option<&ProxyConfig>) {
        let http_client = build_client(proxy);
        info!(proxied = http_client.is_proxied(), "proxy configuration changed");
        *self
            .http_client
            .write()
            .unwrap_or_else(PoisonError::into_inner) = http_client;
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn is_proxied(&self) -> bool {
        self.http_client().is_proxied()
    }

    // 只在读锁内clone，不跨await持有锁
    pub(crate) fn http_client(&self) -> HttpClient {
        self.http_client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
