use std::net::SocketAddrV4;

/// Server configs
#[derive(Debug)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    pub database_url: String,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, database_url: String) -> Self {
        Self { addr, database_url }
    }
}
