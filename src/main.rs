//! editcore - replay editing scripts against the text engine

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::CliArgs;

fn main() -> Result<()> {
    editcore::tracing::init();

    let args = CliArgs::parse();
    args.run()
}
