//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

/// A request as seen by [`MockServer`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self { status, content_type: "application/json".to_string(), body: body.as_bytes().to_vec() }
    }

    pub fn bytes(body: &[u8]) -> Self {
        Self {
            status: 200,
            content_type: "application/octet-stream".to_string(),
            body: body.to_vec(),
        }
    }
}

type Routes = HashMap<(String, String), VecDeque<MockResponse>>;

/// Minimal blocking HTTP/1.1 server on 127.0.0.1 for exercising real requests
///
/// Each route answers with its queued responses in order; the last one repeats.
/// Unknown routes get a 404.
pub struct MockServer {
    addr: SocketAddr,
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Failed to read mock server address");
        let routes: Arc<Mutex<Routes>> = Arc::default();
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::default();

        let thread_routes = Arc::clone(&routes);
        let thread_requests = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let _ = handle_connection(stream, &thread_routes, &thread_requests);
            }
        });

        Self { addr, routes, requests }
    }

    /// Queue a response for `method path`
    pub fn route(self, method: &str, path: &str, response: MockResponse) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back(response);
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn api_base(&self) -> String {
        self.url("/api")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests().into_iter().filter(|r| r.path == path).collect()
    }
}

fn handle_connection(
    mut stream: TcpStream,
    routes: &Mutex<Routes>,
    requests: &Mutex<Vec<RecordedRequest>>,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default();
    let path = target.split('?').next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 || line == "\r\n" || line == "\n" {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
        }
    }

    let content_length = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body)?;

    let response = {
        let mut routes = routes.lock().unwrap();
        match routes.get_mut(&(method.clone(), path.clone())) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        }
    }
    .unwrap_or_else(|| MockResponse::json(404, r#"{"message":"not found"}"#));

    requests.lock().unwrap().push(RecordedRequest {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let reason = match response.status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        _ => "Status",
    };
    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason,
        response.content_type,
        response.body.len()
    )?;
    stream.write_all(&response.body)?;
    stream.flush()
}

/// Blocking client that ignores proxy environment variables
pub fn test_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder().no_proxy().build().expect("Failed to build client")
}

/// Builder for one `getChatsHistory` entry
pub struct MessageBuilder {
    id: i64,
    sender_id: i64,
    text: Option<String>,
    sent_at: i64,
    upload: Option<String>,
}

impl MessageBuilder {
    pub fn new(id: i64) -> Self {
        Self { id, sender_id: 36, text: Some(String::new()), sent_at: 1_700_000_000 + id, upload: None }
    }

    pub fn sender(mut self, sender_id: i64) -> Self {
        self.sender_id = sender_id;
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn null_text(mut self) -> Self {
        self.text = None;
        self
    }

    pub fn sent_at(mut self, sent_at: i64) -> Self {
        self.sent_at = sent_at;
        self
    }

    pub fn upload(mut self, path: &str) -> Self {
        self.upload = Some(path.to_string());
        self
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "send_by": self.sender_id,
            "message": self.text,
            "send_at": self.sent_at,
            "upload": self.upload.as_ref().map(|p| serde_json::json!({ "path": p })),
        })
    }

    pub fn build(&self) -> b4nd_archiver::ChatMessage {
        serde_json::from_value(self.to_value()).expect("Failed to build ChatMessage")
    }
}

/// `{"success":true,"data":[...]}` body for the given messages
pub fn history_body(messages: &[MessageBuilder]) -> String {
    let data: Vec<_> = messages.iter().map(MessageBuilder::to_value).collect();
    serde_json::json!({ "success": true, "data": data }).to_string()
}

/// One archived file: relative path, contents, and mtime in epoch seconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSnapshot {
    pub path: PathBuf,
    pub contents: Vec<u8>,
    pub modified: u64,
}

/// Every regular file under `root`, sorted by path
pub fn snapshot(root: &Path) -> Vec<FileSnapshot> {
    let mut files: Vec<FileSnapshot> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| FileSnapshot {
            path: e.path().strip_prefix(root).unwrap().to_path_buf(),
            contents: fs::read(e.path()).unwrap(),
            modified: mtime_secs(e.path()),
        })
        .collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

pub fn mtime_secs(path: &Path) -> u64 {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map(|t: SystemTime| t.duration_since(UNIX_EPOCH).unwrap().as_secs())
        .unwrap_or_else(|e| panic!("Failed to read mtime of {}: {}", path.display(), e))
}

/// Command for the binary with proxies, tokens, and user config isolated from the host
pub fn archiver_cmd(config_home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_b4nd-archiver"));
    for var in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"]
    {
        cmd.env_remove(var);
    }
    cmd.env_remove("B4ND_TOKEN")
        .env_remove("RUST_LOG")
        .env("HOME", config_home.path())
        .env("XDG_CONFIG_HOME", config_home.path().join("config"));
    cmd
}
