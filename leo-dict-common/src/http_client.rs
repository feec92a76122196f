//! 构建发送请求用的http client，可选择通过代理转发

use crate::Error;
use serde::Deserialize;
use tracing::{debug, warn};

/// 代理设置
///
/// `enabled`为`false`时忽略所有url；`https_url`为`None`时https请求直连
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProxyConfig {
    #[serde(default)]
    pub enabled: bool,
    pub http_url: Option<String>,
    pub https_url: Option<String>,
}

impl ProxyConfig {
    /// 只代理http请求
    pub fn http(url: impl Into<String>) -> Self {
        Self {
            enabled: true,
            http_url: Some(url.into()),
            https_url: None,
        }
    }

    pub fn with_https(mut self, url: impl Into<String>) -> Self {
        self.https_url = Some(url.into());
        self
    }
}

// 构建失败时先保存原因，等到发请求的时候再返回
#[derive(Clone, Debug)]
struct Deferred {
    proxy_url: Option<String>,
    message: String,
}

impl Deferred {
    fn to_error(&self) -> Error {
        match &self.proxy_url {
            Some(url) => Error::Proxy {
                url: url.clone(),
                message: self.message.clone(),
            },
            None => Error::Common(format!("build http client failed: {}", self.message)),
        }
    }
}

/// reqwest::Client的包装，clone的开销很小，可以在多个请求之间共享
#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: Result<reqwest::Client, Deferred>,
    proxied: bool,
}

impl HttpClient {
    /// 直连，不读取系统的`HTTP_PROXY`等环境变量
    pub fn direct() -> Self {
        build_client(None)
    }

    /// 是否配置了代理（不代表代理地址有效）
    pub fn is_proxied(&self) -> bool {
        self.proxied
    }

    /// 获取底层的reqwest::Client，代理地址无效时在这里返回错误
    pub fn client(&self) -> Result<&reqwest::Client, Error> {
        self.inner.as_ref().map_err(Deferred::to_error)
    }

    pub fn get(&self, url: reqwest::Url) -> Result<reqwest::RequestBuilder, Error> {
        Ok(self.client()?.get(url))
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::direct()
    }
}

/// 根据代理设置构建client
///
/// - `None`或`enabled == false`：直连
/// - `enabled == true`：http请求走`http_url`，https请求走`https_url`（如果有）
///
/// 代理地址格式错误时不会在这里报错，而是在第一次请求时返回[Error::Proxy]
pub fn build_client(proxy: Option<&ProxyConfig>) -> HttpClient {
    let proxy = proxy.filter(|p| p.enabled);
    let Some(proxy) = proxy else {
        debug!("building direct http client");
        return HttpClient {
            inner: finish(reqwest::Client::builder().no_proxy()),
            proxied: false,
        };
    };

    let mut builder = reqwest::Client::builder().no_proxy();
    let mut proxied = false;

    if let Some(url) = proxy.http_url.as_deref() {
        match reqwest::Proxy::http(url) {
            Ok(p) => builder = builder.proxy(p),
            Err(e) => return deferred_proxy_error(url, e),
        }
        proxied = true;
    }
    if let Some(url) = proxy.https_url.as_deref() {
        match reqwest::Proxy::https(url) {
            Ok(p) => builder = builder.proxy(p),
            Err(e) => return deferred_proxy_error(url, e),
        }
        proxied = true;
    }

    if !proxied {
        warn!("proxy is enabled but no proxy url is configured, using direct connection");
    } else {
        debug!(
            http = ?proxy.http_url,
            https = ?proxy.https_url,
            "building proxied http client"
        );
    }

    HttpClient {
        inner: finish(builder),
        proxied,
    }
}

fn finish(builder: reqwest::ClientBuilder) -> Result<reqwest::Client, Deferred> {
    builder.build().map_err(|e| Deferred {
        proxy_url: None,
        message: e.to_string(),
    })
}

fn deferred_proxy_error(url: &str, e: reqwest::Error) -> HttpClient {
    warn!(url, error = %e, "invalid proxy url");
    HttpClient {
        inner: Err(Deferred {
            proxy_url: Some(url.to_owned()),
            message: e.to_string(),
        }),
        proxied: true,
    }
}
