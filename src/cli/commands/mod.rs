use clap::Subcommand;
use std::path::PathBuf;

pub mod check;
pub mod compress;
pub mod format;

#[derive(Subcommand)]
pub enum Commands {
    /// Pretty-print an XML file with four-space indentation
    Format {
        /// Source XML file
        #[arg(short, long)]
        source: PathBuf,

        /// Output file (prints to stdout if not specified)
        #[arg(short, long)]
        destination: Option<PathBuf>,
    },

    /// Compact an XML file onto a single line
    Compress {
        /// Source XML file
        #[arg(short, long)]
        source: PathBuf,

        /// Output file (prints to stdout if not specified)
        #[arg(short, long)]
        destination: Option<PathBuf>,
    },

    /// Validate an XML file and print a document summary
    Check {
        /// Source XML file
        #[arg(short, long)]
        source: PathBuf,
    },
}

impl Commands {
    /// Dispatch the selected subcommand.
    ///
    /// # Errors
    /// Returns an error when the underlying operation fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Format {
                source,
                destination,
            } => format::execute(source, destination.as_deref()),
            Commands::Compress {
                source,
                destination,
            } => compress::execute(source, destination.as_deref()),
            Commands::Check { source } => check::execute(source),
        }
    }
}
