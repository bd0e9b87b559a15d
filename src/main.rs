use anyhow::Result;
use oust_engine::{SearchConfig, Searcher};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let searcher = Searcher::new(SearchConfig::default());
    info!(engine = %searcher.identify(), "oust engine ready");
    Ok(())
}
