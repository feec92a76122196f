use super::Client;
use super::Error;
use super::parse::parse_translation;
use super::types_rs::TranslatedEntry;
use super::utils::translation_url;
use crate::language::split_language_code;
use leo_dict_common::helper::read_text_response;
use tracing::{debug, warn};

impl Client {
    /// 查词
    ///
    /// `language_code`为语言对代码（如`ende`），这里不做校验，可以使用[`crate::language`]中的值；
    /// `query`为用户输入的原文，会先进行percent encode。
    ///
    /// 没有结果时返回空的`Vec`，网络错误和xml解析错误直接返回，不会重试
    pub async fn translate(
        &self,
        language_code: &str,
        query: &str,
    ) -> Result<Vec<TranslatedEntry>, Error> {
        let url = translation_url(&self.host, language_code, query)?;
        debug!(%url, "sending translate request");

        let http_client = self.http_client();
        let resp = http_client.get(url)?.send().await?;
        let text = read_text_response(resp).await?;

        let entries = parse_translation(&text)?;
        check_languages(language_code, &entries)?;
        debug!(count = entries.len(), "translate finished");

        Ok(entries)
    }
}

// 结果的语言必须是语言对中的一个；代码格式不认识时不检查
fn check_languages(language_code: &str, entries: &[TranslatedEntry]) -> Result<(), Error> {
    let Some((a, b)) = split_language_code(language_code) else {
        return Ok(());
    };

    match entries
        .iter()
        .position(|e| e.language != a && e.language != b)
    {
        Some(index) => {
            let lang = &entries[index].language;
            warn!(lang = %lang, language_code, index, "entry language is not part of the language pair");
            Err(Error::InvalidEntry {
                index,
                reason: format!("language `{lang}` is not part of `{language_code}`"),
            })
        }
        None => Ok(()),
    }
}
