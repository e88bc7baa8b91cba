//! Command-line configuration.

use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;

pub const DEFAULT_PORT: u16 = 8001;

/// Relay cross-origin GET requests: `GET /<url>` fetches `<url>` and returns
/// it with `Access-Control-Allow-Origin: *`.
///
/// Log verbosity is read from `RUST_LOG`.
#[derive(Debug, Parser)]
#[command(name = "cors-relay", version)]
pub struct Config {
    /// Port to listen on, on all interfaces
    #[arg(default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
