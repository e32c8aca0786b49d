use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "vibemap-server")]
#[command(about = "Location recommendation service", long_about = None)]
struct Args {
    #[arg(short, long, default_value = vibemap::DEFAULT_CONFIG)]
    config: String,
    #[arg(short, long)]
    debug: bool,
    /// Log as JSON lines instead of plain text.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug {
        "vibemap=debug,tower_http=debug"
    } else {
        "vibemap=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(args.json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!args.json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    if let Err(e) = vibemap::run(&args.config, args.debug).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
