//! Synchronous JSONL client for activity control sockets.
//!
//! Uses `std::os::unix::net::UnixStream`. Each call opens a fresh
//! connection, writes one request line and reads one response line.

use std::cell::Cell;
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

use super::address::ActivityAddress;
use super::errors::ControlError;
use super::traits::{ActivityControl, ControlConnector};

/// Connects to activities listening on sockets inside one directory.
#[derive(Debug, Clone)]
pub struct SocketConnector {
    socket_dir: PathBuf,
    read_timeout: Duration,
    write_timeout: Duration,
}

impl SocketConnector {
    pub fn new(socket_dir: PathBuf, read_timeout: Duration, write_timeout: Duration) -> Self {
        Self {
            socket_dir,
            read_timeout,
            write_timeout,
        }
    }

    pub fn socket_dir(&self) -> &Path {
        &self.socket_dir
    }
}

impl ControlConnector for SocketConnector {
    fn connect(&self, address: &ActivityAddress) -> Result<Box<dyn ActivityControl>, ControlError> {
        let socket_path = address.socket_path(&self.socket_dir);
        if !socket_path.exists() {
            return Err(ControlError::NotRunning {
                path: socket_path.display().to_string(),
            });
        }

        info!(
            event = "core.control.channel_opened",
            service_name = address.service_name(),
            socket = %socket_path.display()
        );

        Ok(Box::new(SocketActivityControl {
            address: address.clone(),
            socket_path,
            read_timeout: self.read_timeout,
            write_timeout: self.write_timeout,
            next_id: Cell::new(1),
        }))
    }
}

/// Control client bound to a single activity.
#[derive(Debug)]
pub struct SocketActivityControl {
    address: ActivityAddress,
    socket_path: PathBuf,
    read_timeout: Duration,
    write_timeout: Duration,
    next_id: Cell<u64>,
}

impl SocketActivityControl {
    pub fn address(&self) -> &ActivityAddress {
        &self.address
    }

    fn next_request_id(&self) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        format!("req-{}", id)
    }

    fn open_stream(&self) -> Result<UnixStream, ControlError> {
        let stream = UnixStream::connect(&self.socket_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::ConnectionRefused | std::io::ErrorKind::NotFound => {
                ControlError::NotRunning {
                    path: self.socket_path.display().to_string(),
                }
            }
            _ => ControlError::ConnectionFailed {
                message: e.to_string(),
            },
        })?;

        stream.set_read_timeout(Some(self.read_timeout))?;
        stream.set_write_timeout(Some(self.write_timeout))?;

        Ok(stream)
    }

    /// Invoke `method` and return the reply's `value` field.
    fn call(&self, method: &str) -> Result<serde_json::Value, ControlError> {
        let request_id = self.next_request_id();
        debug!(
            event = "core.control.call_started",
            service_name = self.address.service_name(),
            method = method,
            request_id = %request_id
        );

        let request = serde_json::json!({
            "id": request_id,
            "type": "call",
            "destination": self.address.service_name(),
            "path": self.address.object_path(),
            "interface": self.address.interface(),
            "method": method,
        });

        let mut stream = self.open_stream()?;
        let response = send_request(&mut stream, request)?;

        debug!(
            event = "core.control.call_completed",
            service_name = self.address.service_name(),
            method = method
        );

        Ok(response
            .get("value")
            .cloned()
            .unwrap_or(serde_json::Value::Null))
    }

    fn call_string(&self, method: &str) -> Result<String, ControlError> {
        match self.call(method)? {
            serde_json::Value::String(value) => Ok(value),
            other => Err(ControlError::ProtocolError {
                message: format!("'{}' returned {} instead of a string", method, other),
            }),
        }
    }
}

impl ActivityControl for SocketActivityControl {
    fn get_id(&self) -> Result<String, ControlError> {
        self.call_string("get_id")
    }

    fn get_type(&self) -> Result<String, ControlError> {
        self.call_string("get_type")
    }

    fn get_shared(&self) -> Result<bool, ControlError> {
        match self.call("get_shared")? {
            serde_json::Value::Bool(shared) => Ok(shared),
            other => Err(ControlError::ProtocolError {
                message: format!("'get_shared' returned {} instead of a boolean", other),
            }),
        }
    }

    fn share(&self) -> Result<(), ControlError> {
        self.call("share").map(|_| ())
    }
}

/// Send a request and read one response over a JSONL connection.
///
/// Creates a new BufReader per call. Do NOT reuse a stream across calls:
/// the reader's internal buffer may hold bytes meant for a later read.
fn send_request(
    stream: &mut UnixStream,
    request: serde_json::Value,
) -> Result<serde_json::Value, ControlError> {
    let msg = serde_json::to_string(&request).map_err(|e| ControlError::ProtocolError {
        message: e.to_string(),
    })?;

    writeln!(stream, "{}", msg)?;
    stream.flush()?;

    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.is_empty() {
        return Err(ControlError::ProtocolError {
            message: "Empty response from activity".to_string(),
        });
    }

    let response: serde_json::Value =
        serde_json::from_str(&line).map_err(|e| ControlError::ProtocolError {
            message: format!("Invalid JSON response: {}", e),
        })?;

    if response.get("type").and_then(|t| t.as_str()) == Some("error") {
        let code = response
            .get("code")
            .and_then(|c| c.as_str())
            .unwrap_or("unknown");
        let message = response
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown activity error");
        return Err(ControlError::RemoteError {
            message: format!("[{}] {}", code, message),
        });
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::net::UnixListener;
    use std::thread;

    /// Serve `replies.len()` connections, answering each with the next reply
    /// and returning the received request lines.
    fn serve(listener: UnixListener, replies: Vec<String>) -> thread::JoinHandle<Vec<String>> {
        thread::spawn(move || {
            let mut requests = Vec::new();
            for reply in replies {
                let (stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                requests.push(line);
                let mut writer = stream;
                writeln!(writer, "{}", reply).unwrap();
            }
            requests
        })
    }

    fn connector(dir: &Path) -> SocketConnector {
        SocketConnector::new(
            dir.to_path_buf(),
            Duration::from_secs(5),
            Duration::from_secs(5),
        )
    }

    #[test]
    fn test_connect_without_socket_is_not_running() {
        let dir = tempfile::tempdir().unwrap();
        let address = ActivityAddress::for_window(11).unwrap();
        let result = connector(dir.path()).connect(&address);
        assert!(matches!(result, Err(ControlError::NotRunning { .. })));
    }

    #[test]
    fn test_identity_queries() {
        let dir = tempfile::tempdir().unwrap();
        let address = ActivityAddress::for_window(42).unwrap();
        let listener = UnixListener::bind(address.socket_path(dir.path())).unwrap();
        let server = serve(
            listener,
            vec![
                r#"{"id":"req-1","type":"return","value":"abc123"}"#.to_string(),
                r#"{"id":"req-2","type":"return","value":"org.example.Foo"}"#.to_string(),
                r#"{"id":"req-3","type":"return","value":true}"#.to_string(),
            ],
        );

        let control = connector(dir.path()).connect(&address).unwrap();
        assert_eq!(control.get_id().unwrap(), "abc123");
        assert_eq!(control.get_type().unwrap(), "org.example.Foo");
        assert!(control.get_shared().unwrap());

        let requests = server.join().unwrap();
        let first: serde_json::Value = serde_json::from_str(&requests[0]).unwrap();
        assert_eq!(first["id"], "req-1");
        assert_eq!(first["type"], "call");
        assert_eq!(first["destination"], "org.laptop.Activity42");
        assert_eq!(first["path"], "/org/laptop/Activity/42");
        assert_eq!(first["interface"], "org.laptop.Activity");
        assert_eq!(first["method"], "get_id");

        let third: serde_json::Value = serde_json::from_str(&requests[2]).unwrap();
        assert_eq!(third["id"], "req-3");
        assert_eq!(third["method"], "get_shared");
    }

    #[test]
    fn test_share_accepts_null_value() {
        let dir = tempfile::tempdir().unwrap();
        let address = ActivityAddress::for_window(3).unwrap();
        let listener = UnixListener::bind(address.socket_path(dir.path())).unwrap();
        let server = serve(
            listener,
            vec![r#"{"id":"req-1","type":"return","value":null}"#.to_string()],
        );

        let control = connector(dir.path()).connect(&address).unwrap();
        control.share().unwrap();

        let requests = server.join().unwrap();
        assert!(requests[0].contains(r#""method":"share""#));
    }

    #[test]
    fn test_error_reply_becomes_remote_error() {
        let dir = tempfile::tempdir().unwrap();
        let address = ActivityAddress::for_window(3).unwrap();
        let listener = UnixListener::bind(address.socket_path(dir.path())).unwrap();
        let server = serve(
            listener,
            vec![
                r#"{"id":"req-1","type":"error","code":"not_ready","message":"still loading"}"#
                    .to_string(),
            ],
        );

        let control = connector(dir.path()).connect(&address).unwrap();
        let error = control.get_id().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Activity returned error: [not_ready] still loading"
        );
        server.join().unwrap();
    }

    #[test]
    fn test_wrong_value_type_is_protocol_error() {
        let dir = tempfile::tempdir().unwrap();
        let address = ActivityAddress::for_window(3).unwrap();
        let listener = UnixListener::bind(address.socket_path(dir.path())).unwrap();
        let server = serve(
            listener,
            vec![r#"{"id":"req-1","type":"return","value":"yes"}"#.to_string()],
        );

        let control = connector(dir.path()).connect(&address).unwrap();
        let result = control.get_shared();
        assert!(matches!(result, Err(ControlError::ProtocolError { .. })));
        server.join().unwrap();
    }

    #[test]
    fn test_invalid_json_is_protocol_error() {
        let dir = tempfile::tempdir().unwrap();
        let address = ActivityAddress::for_window(3).unwrap();
        let listener = UnixListener::bind(address.socket_path(dir.path())).unwrap();
        let server = serve(listener, vec!["not json".to_string()]);

        let control = connector(dir.path()).connect(&address).unwrap();
        let result = control.get_type();
        assert!(matches!(result, Err(ControlError::ProtocolError { .. })));
        server.join().unwrap();
    }
}
