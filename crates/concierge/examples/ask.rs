use clap::Parser;
use concierge::{
    ollama::OllamaAdapterBuilder,
    router::{TaskRouter, TaskSelection},
    task::TaskKind,
};
use tracing_subscriber::EnvFilter;

/// # Ask – run one task from the command line
///
/// The command-line flags mirror the widgets of a task-selector front end:
/// pick a task by its label, type the input and supply whatever parameters
/// that task needs.
///
/// ## How to run
///
/// ```bash
/// ollama pull gemma3                  # once
/// cargo run -p concierge --example ask -- --task "Q&A" "Capital of France?"
/// cargo run -p concierge --example ask -- --task Translation \
///     --source-lang English --target-lang Urdu "Good morning"
/// cargo run -p concierge --example ask -- --task "Role-Play Comparison" \
///     --role Doctor "I keep waking up at 4am."
/// ```
///
/// `OLLAMA_URL`, `OLLAMA_MODEL` and `OLLAMA_TIMEOUT_SECS` override the
/// backend defaults. Set `RUST_LOG=concierge=debug,concierge_ollama=debug`
/// to watch the round trips.
#[derive(Debug, Parser)]
#[command(about = "Run a single prompt-orchestration task")]
struct Args {
    /// Task label or identifier, e.g. "Q&A" or "role_play".
    #[arg(short, long, default_value = "Q&A")]
    task: String,

    /// Source language for Translation.
    #[arg(long)]
    source_lang: Option<String>,

    /// Target language for Translation.
    #[arg(long)]
    target_lang: Option<String>,

    /// Role for Role-Play and Role-Play Comparison.
    #[arg(long)]
    role: Option<String>,

    /// Sentiment or Intent.
    #[arg(long)]
    classification_mode: Option<String>,

    /// Zero-Shot or Few-Shot.
    #[arg(long)]
    shot_type: Option<String>,

    /// List the available tasks and exit.
    #[arg(long)]
    list: bool,

    /// The free-text input.
    input: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list {
        for kind in TaskKind::ALL {
            println!("{:<22} {}", kind.label(), kind.id());
        }
        return Ok(());
    }

    let backend = OllamaAdapterBuilder::new_from_env().build()?;
    let router = TaskRouter::new(backend);

    let selection = TaskSelection {
        task: args.task,
        input: args.input.join(" "),
        source_lang: args.source_lang,
        target_lang: args.target_lang,
        role: args.role,
        classification_mode: args.classification_mode,
        shot_type: args.shot_type,
    };

    println!("**Result:**");
    println!("{}", router.route(&selection).await);

    Ok(())
}
