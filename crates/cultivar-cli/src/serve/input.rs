use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::ArgMatches;
use serde::Serialize;

use cultivar_classifiers::artifact::DEFAULT_ARTIFACT_PATH;

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime settings for `cultivar serve`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub version: String,
    pub artifact: PathBuf,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            version: clap::crate_version!().to_string(),
            artifact: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Always listen on every interface.
    pub const BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

    /// Apply `--artifact` and `--port`/`PORT` on top of the defaults.
    pub fn from_arguments(matches: &ArgMatches) -> Self {
        let mut config = ServerConfig::default();

        if let Some(artifact) = matches.get_one::<PathBuf>("artifact") {
            config.artifact = artifact.clone();
        }

        if let Some(port) = matches.get_one::<u16>("port") {
            config.port = *port;
        }

        config
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(Self::BIND_HOST, self.port)
    }
}
