use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cors_relay::{Config, Fetcher, Server, forward};

#[tokio::main]
async fn main() -> Result<(), cors_relay::Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "cors_relay=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    let app = forward::routes(Fetcher::new()?);

    // Bind before announcing, so a taken port fails without the banner.
    let listener = TcpListener::bind(config.addr()).await?;
    println!("Starting CORS proxy server on port {}...", config.port);
    Server::from_listener(listener).serve(app).await
}
