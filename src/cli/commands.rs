use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cloner::half_clone;
use crate::utils::{get_claude_dir, validate_project_path};

#[derive(Parser)]
#[command(name = "ai-session-cloner")]
#[command(version = "0.1.0")]
#[command(about = "Clone the later half of a recorded session into a new one", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new session from the trailing half of an existing one
    HalfClone {
        /// Session id (UUID) of the source conversation
        session_id: String,
        /// Absolute path of the project the session belongs to
        project_path: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::HalfClone { session_id, project_path }) => {
            run_half_clone(session_id, project_path)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn run_half_clone(session_id: &str, project_path: &Path) -> Result<()> {
    validate_project_path(project_path)?;
    let claude_dir = get_claude_dir()?;

    let outcome = half_clone(&claude_dir, session_id, project_path)?;

    println!("New session: {}", outcome.new_session_id);
    println!(
        "Kept {} of {} messages ({})",
        outcome.kept,
        outcome.kept + outcome.skipped,
        outcome.log_path.display()
    );

    Ok(())
}
