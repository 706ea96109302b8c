use clap::Parser;
use server::Config;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "yt-relay", version)]
#[command(about = "Paste a video link, get an MP4", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// yt-dlp executable (overrides the config file)
    #[arg(long)]
    ytdlp: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    if let Some(ytdlp) = cli.ytdlp {
        config.ytdlp_path = ytdlp;
    }

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;

    server::run_server(addr, config).await
}
