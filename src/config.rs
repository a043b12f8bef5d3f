//! Server configuration
//!
//! Every option can be given on the command line or through the
//! environment. `main` loads a `.env` file before parsing.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Parser)]
#[command(name = "exercise-tracker")]
#[command(about = "REST API for tracking users and their exercises", long_about = None)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory of static assets served as a fallback
    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Directory holding the landing page (`index.html`)
    #[arg(long, env = "VIEWS_DIR", default_value = "views")]
    pub views_dir: PathBuf,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn assets(&self) -> StaticAssets {
        StaticAssets {
            public_dir: self.public_dir.clone(),
            views_dir: self.views_dir.clone(),
        }
    }
}

/// Locations of the landing page and static files
#[derive(Debug, Clone)]
pub struct StaticAssets {
    pub public_dir: PathBuf,
    pub views_dir: PathBuf,
}

impl StaticAssets {
    pub fn index_page(&self) -> PathBuf {
        self.views_dir.join("index.html")
    }
}

impl Default for StaticAssets {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            views_dir: PathBuf::from("views"),
        }
    }
}
