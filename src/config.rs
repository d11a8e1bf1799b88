use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = match env::var("SERVICE_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .context("SERVICE_PORT must be a valid port number (0-65535)")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Config { service_port })
    }

    /// Address the listener binds: all interfaces on the configured port.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.service_port))
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.socket_addr());
    }
}
