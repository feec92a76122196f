use super::Error;
use super::types_rs::{Entry, Search, Side, TranslatedEntry};
use quick_xml::Reader;
use quick_xml::events::Event;

/// 哪一侧是用户输入的源语言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSide {
    Left,
    Right,
}

impl SourceSide {
    /// 左侧命中数严格大于右侧时左侧为源语言，否则（包括相等）右侧为源语言
    pub fn from_hit_counts(left: u64, right: u64) -> Self {
        if left > right {
            SourceSide::Left
        } else {
            SourceSide::Right
        }
    }

    /// 源语言一侧作为`description`，另一侧作为`caption`
    fn resolve(self, left: SideText, right: SideText) -> TranslatedEntry {
        let (source, target) = match self {
            SourceSide::Left => (left, right),
            SourceSide::Right => (right, left),
        };
        TranslatedEntry {
            caption: target.text,
            description: source.text,
            language: target.lang,
        }
    }
}

struct SideText {
    text: String,
    lang: String,
}

impl SideText {
    fn from_side(index: usize, side: Side) -> Result<Self, Error> {
        let text = side
            .words
            .word
            .into_iter()
            .next()
            .map(|w| w.text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::InvalidEntry {
                index,
                reason: format!("side `{}` has no word text", side.lang),
            })?;
        Ok(Self {
            text,
            lang: side.lang,
        })
    }
}

fn resolve_entry(index: usize, entry: Entry, source: SourceSide) -> Result<TranslatedEntry, Error> {
    let side_count = entry.side.len();
    let mut sides = entry.side.into_iter();
    let (Some(left), Some(right)) = (sides.next(), sides.next()) else {
        return Err(Error::InvalidEntry {
            index,
            reason: format!("expected two sides, found {side_count}"),
        });
    };

    let left = SideText::from_side(index, left)?;
    let right = SideText::from_side(index, right)?;
    Ok(source.resolve(left, right))
}

enum Element {
    Search,
    Entry,
}

/// 按文档顺序扫描整个xml，取出根节点下的`search`和任意层级的`entry`
///
/// 每个元素截取原文片段后单独反序列化，不关心外层的容器
fn scan(xml: &str) -> Result<(Search, Vec<Entry>), Error> {
    let mut reader = Reader::from_str(xml);
    // 当前所在的层级，根节点的子元素为1
    let mut depth = 0usize;
    let mut search: Option<Search> = None;
    let mut entries = Vec::new();

    loop {
        let start = reader.buffer_position() as usize;
        let (e, empty) = match reader.read_event()? {
            Event::Start(e) => (e, false),
            Event::Empty(e) => (e, true),
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                continue;
            }
            Event::Eof => break,
            _ => continue,
        };

        let element = match e.name().as_ref() {
            b"entry" => Element::Entry,
            b"search" if depth == 1 && search.is_none() => Element::Search,
            _ => {
                if !empty {
                    depth += 1;
                }
                continue;
            }
        };

        if !empty {
            reader.read_to_end(e.name())?;
        }
        let fragment = &xml[start..reader.buffer_position() as usize];
        match element {
            Element::Search => search = Some(quick_xml::de::from_str::<Search>(fragment)?),
            Element::Entry => entries.push(quick_xml::de::from_str::<Entry>(fragment)?),
        }
    }

    let search = search.ok_or(Error::MissingSearch)?;
    Ok((search, entries))
}

/// 解析`query.xml`的返回内容
///
/// 任何一个entry解析失败都会返回错误，不返回部分结果
pub fn parse_translation(xml: &str) -> Result<Vec<TranslatedEntry>, Error> {
    let (search, entries) = scan(xml)?;
    let source =
        SourceSide::from_hit_counts(search.hit_word_cnt_left, search.hit_word_cnt_right);

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| resolve_entry(i, entry, source))
        .collect()
}
