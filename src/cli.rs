use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// git-dircompare command-line interface
#[derive(Parser, Debug, Clone)]
#[command(name = "git-dircompare", version, about = "Compare two revisions of a working tree directory", long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compare the working tree with a revision (prompts for anything missing)
    Open {
        /// First comparison endpoint (prompted for when omitted)
        #[arg(value_name = "REF1")]
        ref1: Option<String>,

        /// Second comparison endpoint (defaults to the working tree)
        #[arg(value_name = "REF2")]
        ref2: Option<String>,

        /// File or directory used to locate the owning repository
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Compare the working tree with HEAD
    Head {
        /// File or directory used to locate the owning repository
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Reopen a previously computed comparison between two revisions
    Results {
        /// Base endpoint of the stored comparison (omit for working tree)
        #[arg(value_name = "REF1")]
        ref1: Option<String>,

        /// Compare endpoint of the stored comparison (omit for working tree)
        #[arg(value_name = "REF2")]
        ref2: Option<String>,

        /// Repository the comparison belongs to (defaults to the current one)
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Compare a revision with the working tree
    Working {
        /// Revision to compare the working tree against
        #[arg(value_name = "REF")]
        reference: String,

        /// Repository the revision belongs to (defaults to the current one)
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
    },
}
