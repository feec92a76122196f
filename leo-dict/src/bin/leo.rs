//! 命令行查词
//!
//! ```text
//! leo de Haus
//! leo df --suggest mais
//! leo --list
//! ```

use clap::Parser;
use leo_dict::config::Settings;
use leo_dict::dict::Client;
use leo_dict::language;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "leo", version, about = "Translate words with the LEO online dictionary")]
struct Args {
    /// Language keyword, e.g. `de` (German/English), see `--list`
    #[arg(required_unless_present = "list")]
    keyword: Option<String>,

    /// Text to look up
    #[arg(required_unless_present = "list")]
    query: Vec<String>,

    /// Settings file with a `[main]` section holding the proxy settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print suggestions instead of translations
    #[arg(short, long)]
    suggest: bool,

    /// Print the supported languages and exit
    #[arg(short, long)]
    list: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list {
        for l in language::languages() {
            println!("{:<4}{:<6}{}", l.keyword, l.language_code, l.description);
        }
        return ExitCode::SUCCESS;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let keyword = args.keyword.unwrap_or_default();
    let lang = language::find_by_keyword(&keyword)
        .ok_or_else(|| format!("unknown keyword `{keyword}`, see --list"))?;
    let query = args.query.join(" ");

    let proxy = match &args.config {
        Some(path) => Some(Settings::load(path)?.proxy_config()),
        None => None,
    };
    let client = Client::builder().maybe_proxy(proxy).build();

    if args.suggest {
        for s in client.suggest(lang.language_code, &query).await? {
            println!("{s}");
        }
        return Ok(());
    }

    let entries = client.translate(lang.language_code, &query).await?;
    if entries.is_empty() {
        println!("no results");
    }
    for e in entries {
        println!("{}  ({}) [{}]", e.caption, e.description, e.language);
    }
    Ok(())
}
