use std::io;
use std::net::SocketAddr;

/// Errors that stop the server from accepting connections
///
/// Unmatched routes are not represented here: they are answered with a 404
/// by the router and never surface past it.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listening socket could not be bound (address in use, no privilege)
    #[error("Failed to bind listener on {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    /// The accept loop terminated with an I/O error
    #[error(transparent)]
    Serve(#[from] io::Error),
}
