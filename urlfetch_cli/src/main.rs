use clap::Parser;
use log::debug;
use urlfetch_core::Fetcher;

#[derive(Parser, Debug)]
#[command(name = "urlfetch")]
#[command(about = "Fetch an http(s) URL and print the response body")]
#[command(version)]
struct Cli {
    /// URL to fetch (http or https only)
    url: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    debug!("fetching {}", cli.url);

    // Exactly one callback fires per request, so a single-slot channel is
    // enough to bridge the fire-and-forget API back to this task.
    let (tx, mut rx) = tokio::sync::mpsc::channel::<Result<String, String>>(1);
    let err_tx = tx.clone();

    let fetcher = Fetcher::new();
    fetcher.get_url(
        &cli.url,
        Box::new(move |body| {
            let _ = tx.try_send(Ok(body));
        }),
        Some(Box::new(move |message| {
            let _ = err_tx.try_send(Err(message));
        })),
    );

    match rx.recv().await {
        Some(Ok(body)) => print!("{}", body),
        Some(Err(message)) => {
            eprintln!("ERROR: {}", message);
            std::process::exit(1);
        }
        // Both callbacks dropped without firing; nothing more will arrive
        None => {
            eprintln!("ERROR: request did not complete");
            std::process::exit(1);
        }
    }
}
