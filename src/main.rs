use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sparsegraph_shell::{report, Flow, Shell, ShellConfig, HELP};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Interactive directed, weighted graph with Graphviz export
#[derive(Parser, Debug)]
#[command(name = "sparsegraph")]
#[command(about = "Interactive sparse adjacency-matrix graph", long_about = None)]
struct Args {
    /// Prompt shown before each command
    #[arg(long, default_value = "graph> ")]
    prompt: String,

    /// Do not print the banner and command summary
    #[arg(short, long)]
    quiet: bool,

    /// Line history file for interactive sessions
    #[arg(long)]
    history: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting sparsegraph v{}", env!("CARGO_PKG_VERSION"));

    let config = ShellConfig {
        prompt: args.prompt,
        show_banner: !args.quiet,
    };
    let mut shell = Shell::new(config);

    if io::stdin().is_terminal() {
        run_interactive(&mut shell, args.history.as_ref())
    } else {
        shell.run(io::stdin().lock(), &mut io::stdout(), &mut io::stderr())?;
        Ok(())
    }
}

fn run_interactive(shell: &mut Shell, history: Option<&PathBuf>) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    if let Some(path) = history {
        if rl.load_history(path).is_err() {
            info!("No history at {:?}", path);
        }
    }

    if shell.config().show_banner {
        println!("{}", shell.banner());
    }

    let prompt = shell.config().prompt.clone();
    let mut stderr = io::stderr();
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }
                match shell.execute(&line) {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::ShowHelp) => println!("{}", HELP),
                    Ok(Flow::Continue) => {}
                    Err(e) => report(&mut stderr, &e)?,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                warn!("Readline error: {}", err);
                break;
            }
        }
    }

    if let Some(path) = history {
        rl.save_history(path)?;
    }
    info!("Shutting down...");
    Ok(())
}
