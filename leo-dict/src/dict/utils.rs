use crate::dict::Error;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

// 只保留RFC 3986的unreserved字符，其余全部编码（空格编码为%20而不是+）
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(crate) fn encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_VALUE).to_string()
}

/// 查词的url，返回xml
pub(crate) fn translation_url(host: &str, language_code: &str, query: &str) -> Result<Url, Error> {
    let code = encode(language_code);
    let s = format!(
        "{host}/dictQuery/m-vocab/{code}/query.xml?tolerMode=nof&lp={code}&lang=de&rmWords=off&rmSearch=on&search={}&searchLoc=0&resultOrder=basic&multiwordShowSingle=on&pos=0&sectLenMax=16&n=1",
        encode(query),
    );
    Url::parse(&s).map_err(|e| Error::Common(format!("url parsed failed: {e}")))
}

/// 输入联想的url，返回json
#[cfg(feature = "suggest")]
pub(crate) fn suggestion_url(host: &str, language_code: &str, query: &str) -> Result<Url, Error> {
    let s = format!(
        "{host}/dictQuery/m-query/conf/{}/query.conf/strlist.json?q={}",
        encode(language_code),
        encode(query),
    );
    Url::parse(&s).map_err(|e| Error::Common(format!("url parsed failed: {e}")))
}
