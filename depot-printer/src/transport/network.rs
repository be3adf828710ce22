//! Raw TCP transport
//!
//! Most Zebra printers accept plain ZPL on TCP port 9100. One blocking
//! connection per document: connect with a timeout, write everything,
//! close.

use std::io::Write;
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::error::{PrintError, PrintResult};

#[derive(Debug, Clone)]
pub struct NetworkTransport {
    host: String,
    port: u16,
    timeout: Duration,
}

impl NetworkTransport {
    pub fn new(host: &str, port: u16, timeout: Duration) -> Self {
        Self { host: host.to_string(), port, timeout }
    }

    fn resolve(&self) -> PrintResult<SocketAddr> {
        let endpoint = format!("{}:{}", self.host, self.port);
        endpoint
            .to_socket_addrs()
            .map_err(|e| PrintError::Validation(format!("invalid address {}: {}", endpoint, e)))?
            .next()
            .ok_or_else(|| PrintError::Validation(format!("unresolvable address: {}", endpoint)))
    }

    fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn connect(&self) -> PrintResult<TcpStream> {
        let addr = self.resolve()?;
        TcpStream::connect_timeout(&addr, self.timeout).map_err(|e| match e.kind() {
            std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock => {
                PrintError::ConnectionTimeout(self.endpoint())
            }
            std::io::ErrorKind::ConnectionRefused => {
                PrintError::ConnectionRefused(self.endpoint())
            }
            _ => PrintError::Transport(format!("{}: {}", self.endpoint(), e)),
        })
    }
}

impl super::Transport for NetworkTransport {
    #[instrument(skip(document), fields(endpoint = %self.endpoint(), data_len = document.len()))]
    fn send(&self, document: &[u8]) -> PrintResult<()> {
        info!("connecting to printer");
        let mut stream = self.connect()?;

        stream
            .set_write_timeout(Some(self.timeout))
            .map_err(|e| PrintError::Transport(format!("{}: {}", self.endpoint(), e)))?;

        stream
            .write_all(document)
            .and_then(|_| stream.flush())
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock => {
                    PrintError::ConnectionTimeout(self.endpoint())
                }
                _ => PrintError::Transport(format!("write failed: {}: {}", self.endpoint(), e)),
            })?;

        let _ = stream.shutdown(Shutdown::Write);
        info!(bytes = document.len(), "document sent");
        Ok(())
    }

    #[instrument(fields(endpoint = %self.endpoint()))]
    fn check(&self) -> PrintResult<bool> {
        let addr = self.resolve()?;
        match TcpStream::connect_timeout(&addr, self.timeout) {
            Ok(_) => {
                info!("printer reachable");
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "printer unreachable");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Transport;

    #[test]
    fn test_unresolvable_host_is_validation_error() {
        let t = NetworkTransport::new("", 9100, Duration::from_secs(1));
        assert!(matches!(t.send(b"^XA^XZ"), Err(PrintError::Validation(_))));
    }

    #[test]
    fn test_refused_connection_maps_to_refused() {
        // Bind to grab a free port, then close it so the connect is refused.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("addr").port();
        drop(listener);

        let t = NetworkTransport::new("127.0.0.1", port, Duration::from_secs(1));
        assert!(matches!(t.send(b"^XA^XZ"), Err(PrintError::ConnectionRefused(_))));
        assert!(!t.check().expect("check"));
    }

    #[test]
    #[ignore = "needs a non-routable address to black-hole the connect"]
    fn test_unreachable_host_times_out_promptly() {
        let t = NetworkTransport::new("10.255.255.1", 9100, Duration::from_secs(1));
        let started = std::time::Instant::now();
        let result = t.send(b"^XA^XZ");
        assert!(matches!(result, Err(PrintError::ConnectionTimeout(_))));
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}
