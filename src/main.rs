use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = florist::cli::Cli::parse();
    if let Err(e) = florist::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
