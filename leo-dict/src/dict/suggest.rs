use super::Client;
use super::Error;
use super::utils::suggestion_url;
use leo_dict_common::helper::read_text_response;
use serde_json::Value;
use tracing::debug;

impl Client {
    /// 输入联想，返回LEO给出的候选词
    pub async fn suggest(&self, language_code: &str, query: &str) -> Result<Vec<String>, Error> {
        let url = suggestion_url(&self.host, language_code, query)?;
        debug!(%url, "sending suggest request");

        let http_client = self.http_client();
        let resp = http_client.get(url)?.send().await?;
        let text = read_text_response(resp).await?;

        parse_suggestions(&text)
    }
}

/// 解析`strlist.json`
///
/// 支持两种格式：
/// - `["Haus", "Hausaufgabe"]`
/// - `["hau", ["Haus", "Hausaufgabe"], ...]`，第一个元素是查询词，后面的元素忽略
pub fn parse_suggestions(json: &str) -> Result<Vec<String>, Error> {
    let v: Value = serde_json::from_str(json)?;
    let Value::Array(items) = v else {
        return Err(Error::Common(
            "suggestion response is not a json array".to_owned(),
        ));
    };

    let list = match items.as_slice() {
        [Value::String(_), Value::Array(list), ..] => list.as_slice(),
        _ => items.as_slice(),
    };

    list.iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(Error::Common(format!(
                "unexpected suggestion item: {other}"
            ))),
        })
        .collect()
}
