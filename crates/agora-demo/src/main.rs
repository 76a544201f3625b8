mod events;
mod scenario;

use clap::Parser;

#[derive(Parser)]
#[command(name = "agora-demo", about = "Fixed demonstration sequence for the agora store")]
struct Cli {
    /// Emit JSONL events instead of the human report lines.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    eprintln!("agora-demo v{}", env!("CARGO_PKG_VERSION"));
    eprintln!();

    scenario::run(scenario::ScenarioConfig { json: cli.json })
}
