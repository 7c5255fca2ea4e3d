use anyhow::anyhow;
use clap::Parser;

use chart_feeds::chart::{self, FEEDS};

/// Fetch a CHART feed and print it as normalized JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the feed to fetch (see --list).
    feed: Option<String>,

    /// Optional upstream filter value (route, route type, or station name,
    /// depending on the feed).
    #[arg(short, long)]
    filter: Option<String>,

    /// List the available feeds and exit.
    #[arg(long)]
    list: bool,
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::try_parse()?;

    if args.list {
        for spec in FEEDS {
            match spec.filter_param {
                Some(param) => println!("{} (filter: {})", spec.name, param),
                None => println!("{}", spec.name),
            }
        }
        return Ok(());
    }

    let feed = args.feed.ok_or_else(|| anyhow!("No feed name given"))?;
    match chart::get_feed(&feed, args.filter.as_deref())? {
        Some(output) => println!("{}", serde_json::to_string_pretty(&output)?),
        None => log::info!("Feed '{}' is currently empty", feed),
    }
    Ok(())
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
