use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "enneakit-cli", version, about = "Enneakit CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run and inspect quiz sessions
    Quiz {
        #[command(subcommand)]
        action: commands::quiz::QuizAction,
    },
    /// Type reference material
    Types {
        #[command(subcommand)]
        action: commands::types::TypesAction,
    },
    /// Question pool tooling
    Pools {
        #[command(subcommand)]
        action: commands::pools::PoolsAction,
    },
    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Quiz { action } => commands::quiz::run(action),
        Commands::Types { action } => commands::types::run(action),
        Commands::Pools { action } => commands::pools::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
