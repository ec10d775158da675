//! CLI entry point for the grid inspection tool

use cellgrid::io::cli::{Cli, GridInspector};
use clap::Parser;

// Rendered rows are the tool's output
#[allow(clippy::print_stdout)]
fn main() -> cellgrid::Result<()> {
    let cli = Cli::parse();
    cellgrid::io::logging::init(cli.verbose)?;
    let inspector = GridInspector::new(cli);
    for line in inspector.run()? {
        println!("{line}");
    }
    Ok(())
}
