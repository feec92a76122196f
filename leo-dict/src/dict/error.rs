#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error: {0}")]
    Common(String),
    #[error("request api failed: {status}, message: {message}")]
    RequestAPIFailed { status: String, message: String },
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("invalid proxy `{url}`: {message}")]
    Proxy { url: String, message: String },
    /// 返回的不是合法的xml
    #[error("xml syntax error: {0}")]
    XmlSyntax(#[from] quick_xml::Error),
    /// 返回的xml结构和预期不一致，如`search`的属性不是数字、`side`缺少`lang`
    #[error("xml parse error, may be the api response is changed: {0}")]
    XmlParse(#[from] quick_xml::DeError),
    #[error("xml has no `search` element")]
    MissingSearch,
    #[error("json parse error, may be the api response is changed: {0}")]
    JsonParse(#[from] serde_json::Error),
    /// xml能解析，但某个`entry`的内容不符合要求
    #[error("invalid entry #{index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

impl From<leo_dict_common::Error> for Error {
    fn from(e: leo_dict_common::Error) -> Self {
        match e {
            leo_dict_common::Error::Common(msg) => Error::Common(msg),
            leo_dict_common::Error::RequestAPIFailed { status, message } => {
                Error::RequestAPIFailed { status, message }
            }
            leo_dict_common::Error::Reqwest(e) => Error::Reqwest(e),
            leo_dict_common::Error::Proxy { url, message } => Error::Proxy { url, message },
        }
    }
}
