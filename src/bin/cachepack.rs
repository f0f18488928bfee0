//! Cachepack command-line binary

fn main() -> anyhow::Result<()> {
    cachepack::cli::run_cli()
}
