use clap::Subcommand;
use std::path::PathBuf;

pub mod pack;

#[derive(Subcommand)]
pub enum Commands {
    /// Pack the dependency directories into a cache archive
    Pack {
        /// Project root containing the dependency directories
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Suppress progress display
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Pack { root, quiet } => pack::execute(root, !*quiet),
        }
    }
}
