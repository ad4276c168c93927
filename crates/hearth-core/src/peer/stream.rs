use std::io::Write;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use super::errors::PeerError;
use super::{PeerMessenger, StreamWriter};
use crate::presence::PeerService;

/// Opens plain TCP streams to peer services.
#[derive(Debug, Clone)]
pub struct TcpPeerMessenger {
    connect_timeout: Duration,
    write_timeout: Duration,
}

impl TcpPeerMessenger {
    pub fn new(connect_timeout: Duration, write_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            write_timeout,
        }
    }
}

fn resolve(service: &PeerService) -> Result<SocketAddr, PeerError> {
    let unresolvable = || PeerError::UnresolvableAddress {
        address: service.address.clone(),
        port: service.port,
    };
    (service.address.as_str(), service.port)
        .to_socket_addrs()
        .map_err(|_| unresolvable())?
        .next()
        .ok_or_else(unresolvable)
}

impl PeerMessenger for TcpPeerMessenger {
    fn open_writer(&self, service: &PeerService) -> Result<Box<dyn StreamWriter>, PeerError> {
        let endpoint = resolve(service)?;
        let stream = TcpStream::connect_timeout(&endpoint, self.connect_timeout).map_err(|e| {
            PeerError::ConnectFailed {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            }
        })?;
        stream.set_write_timeout(Some(self.write_timeout))?;

        debug!(
            event = "core.peer.writer_opened",
            service = %service.name,
            endpoint = %endpoint
        );

        Ok(Box::new(TcpStreamWriter { stream }))
    }
}

/// Writes JSON lines to a connected peer.
#[derive(Debug)]
pub struct TcpStreamWriter {
    stream: TcpStream,
}

impl StreamWriter for TcpStreamWriter {
    fn custom_request(&mut self, method: &str, params: &[&str]) -> Result<(), PeerError> {
        let request = serde_json::json!({
            "type": "custom_request",
            "method": method,
            "params": params,
        });
        let line = serde_json::to_string(&request).map_err(|e| PeerError::Encode {
            message: e.to_string(),
        })?;

        writeln!(self.stream, "{}", line)?;
        self.stream.flush()?;
        Ok(())
    }
}
