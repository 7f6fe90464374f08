//! xmltidy command-line binary

fn main() -> anyhow::Result<()> {
    xmltidy::cli::run_cli()
}
