use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use quizbank::{QuestionType, QuizbankConfig, Result};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quizbank")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Local question bank", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Project root holding quizbank/ (default: current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create quizbank/config.toml and an empty question collection
    Init {
        /// Reset the config to defaults (questions are kept)
        #[arg(short, long)]
        force: bool,
    },

    /// Create a question (interactive when --question is omitted)
    Add {
        /// Question text
        #[arg(short, long)]
        question: Option<String>,

        /// Question type: single, multiple or open
        #[arg(short = 't', long = "type")]
        question_type: Option<QuestionType>,

        /// Option label (repeat for each option)
        #[arg(short, long = "option")]
        options: Vec<String>,
    },

    /// Edit an existing question
    Edit {
        /// Question ID
        id: String,

        /// New question text
        #[arg(short, long)]
        question: Option<String>,

        /// New question type
        #[arg(short = 't', long = "type")]
        question_type: Option<QuestionType>,

        /// Replacement option labels (repeat for each option)
        #[arg(short, long = "option")]
        options: Vec<String>,
    },

    /// Delete a question
    Delete {
        /// Question ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List all questions, newest first
    List {
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Show a single question
    Show {
        /// Question ID
        id: String,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Show unanswered and answered questions
    Board {
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Answer a question (interactive when no values are given)
    Answer {
        /// Question ID
        id: String,

        /// Selected option(s) or answer text
        values: Vec<String>,
    },

    /// Clear the answer of a question
    Clear {
        /// Question ID
        id: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let config = QuizbankConfig::load(&project_root)?;
    quizbank::logging::init_logging(cli.verbose, &config.logging.level)?;
    tracing::debug!(root = %project_root.display(), "Starting quizbank");

    match cli.command {
        Commands::Init { force } => {
            println!("{}", "🚀 Initializing quizbank...".cyan());
            quizbank::cli::init::run(&project_root, force)?;
        }

        Commands::Add {
            question,
            question_type,
            options,
        } => {
            quizbank::cli::add::run(&project_root, question, question_type, options)?;
        }

        Commands::Edit {
            id,
            question,
            question_type,
            options,
        } => {
            quizbank::cli::edit::run(&project_root, &id, question, question_type, options)?;
        }

        Commands::Delete { id, yes } => {
            quizbank::cli::delete::run(&project_root, &id, yes)?;
        }

        Commands::List { json } => {
            quizbank::cli::list::run(&project_root, json)?;
        }

        Commands::Show { id, json } => {
            quizbank::cli::show::run(&project_root, &id, json)?;
        }

        Commands::Board { json } => {
            quizbank::cli::board::run(&project_root, json)?;
        }

        Commands::Answer { id, values } => {
            quizbank::cli::answer::run(&project_root, &id, values)?;
        }

        Commands::Clear { id } => {
            quizbank::cli::clear::run(&project_root, &id)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "quizbank", &mut io::stdout());
        }
    }

    Ok(())
}
