//! Minimal HTTP/1.1 server standing in for the lookup proxy in integration tests.
//!
//! Serves `GET /mojang/{name}` from a fixed table of canned responses and
//! answers 404 for any other path or name.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// Canned response for one username.
#[derive(Debug, Clone)]
pub struct Canned {
    pub status: u16,
    pub body: String,
}

impl Canned {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// Handle to a running server. The server runs until the process exits.
pub struct ProfileServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl ProfileServer {
    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Request paths in arrival order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Returns its handle; `base_url`
/// has no trailing slash (e.g. "http://127.0.0.1:12345").
pub fn start(responses: HashMap<String, Canned>) -> ProfileServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let responses = Arc::new(responses);
    let hits = Arc::new(AtomicUsize::new(0));
    let paths = Arc::new(Mutex::new(Vec::new()));
    {
        let hits = Arc::clone(&hits);
        let paths = Arc::clone(&paths);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let responses = Arc::clone(&responses);
                let hits = Arc::clone(&hits);
                let paths = Arc::clone(&paths);
                thread::spawn(move || handle(stream, &responses, &hits, &paths));
            }
        });
    }
    ProfileServer {
        base_url: format!("http://127.0.0.1:{}", port),
        hits,
        paths,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    responses: &HashMap<String, Canned>,
    hits: &AtomicUsize,
    paths: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("").to_string();
    hits.fetch_add(1, Ordering::SeqCst);
    paths.lock().unwrap().push(path.clone());

    let canned = if method.eq_ignore_ascii_case("GET") {
        path.strip_prefix("/mojang/")
            .and_then(|name| responses.get(name))
            .cloned()
    } else {
        None
    };
    let canned = canned.unwrap_or(Canned {
        status: 404,
        body: r#"{"error":"not found"}"#.to_string(),
    });
    let reason = match canned.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        canned.status,
        reason,
        canned.body.len(),
        canned.body
    );
    let _ = stream.write_all(response.as_bytes());
}
