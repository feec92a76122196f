//! LEO在线词典（<https://dict.leo.org>）客户端
//!
//! ```no_run
//! # async fn run() -> Result<(), leo_dict::dict::Error> {
//! use leo_dict::dict::Client;
//! use leo_dict::language;
//!
//! let client = Client::builder().build();
//! let lang = language::find_by_keyword("de").expect("keyword exists");
//! for entry in client.translate(lang.language_code, "Haus").await? {
//!     println!("{} ({}) [{}]", entry.caption, entry.description, entry.language);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dict;
pub mod language;

pub use leo_dict_common::http_client::{HttpClient, ProxyConfig, build_client};
