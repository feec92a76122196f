use serde::{Deserialize, Serialize};

/// 一条翻译结果
///
/// `caption`是译文（非源语言的一侧），`description`是源语言一侧的原文，
/// `language`是`caption`的语言代码
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TranslatedEntry {
    pub caption: String,
    pub description: String,
    pub language: String,
}

impl TranslatedEntry {
    pub fn new(
        caption: impl Into<String>,
        description: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            caption: caption.into(),
            description: description.into(),
            language: language.into(),
        }
    }
}

// region    --- query.xml
// 返回的xml大致为：
// <xml>
//   <search hitWordCntLeft="5" hitWordCntRight="2" ... />
//   <sectionlist>
//     <section>
//       <entry>
//         <side lang="en"><words><word>house</word></words></side>
//         <side lang="de"><words><word>Haus</word></words></side>
//       </entry>
//     </section>
//   </sectionlist>
// </xml>
// entry可能出现在任意层级，解析时按文档顺序扫描，每个`<search>`和`<entry>`单独反序列化，
// 所以这里不描述外层的容器结构
#[derive(Deserialize, Debug)]
pub(crate) struct Search {
    #[serde(rename = "@hitWordCntLeft")]
    pub hit_word_cnt_left: u64,
    #[serde(rename = "@hitWordCntRight")]
    pub hit_word_cnt_right: u64,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Entry {
    // 第一个是左侧，第二个是右侧
    #[serde(default)]
    pub side: Vec<Side>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Side {
    #[serde(rename = "@lang")]
    pub lang: String,
    pub words: Words,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Words {
    #[serde(default)]
    pub word: Vec<Word>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Word {
    #[serde(rename = "$text", default)]
    pub text: String,
}
// endregion --- query.xml
