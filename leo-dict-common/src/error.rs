#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error: {0}")]
    Common(String),
    #[error("request api failed: {status}, message: {message}")]
    RequestAPIFailed { status: String, message: String },
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// 代理地址无效，构建client时不会报错，在第一次发送请求时返回
    #[error("invalid proxy `{url}`: {message}")]
    Proxy { url: String, message: String },
}
