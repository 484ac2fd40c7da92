use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind (BIND_ADDR)
    pub bind_addr: IpAddr,
    /// TCP port to listen on (PORT)
    pub port: u16,
}

impl ServerConfig {
    /// Load server config from environment variables.
    ///
    /// Both variables are optional; unparsable values are logged and fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => match raw.trim().parse() {
                Ok(port) => port,
                Err(_) => {
                    tracing::warn!("Ignoring unparsable PORT value {:?}", raw);
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => match raw.trim().parse() {
                Ok(addr) => addr,
                Err(_) => {
                    tracing::warn!("Ignoring unparsable BIND_ADDR value {:?}", raw);
                    DEFAULT_BIND_ADDR
                }
            },
            Err(_) => DEFAULT_BIND_ADDR,
        };

        Self { bind_addr, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
        }
    }
}
