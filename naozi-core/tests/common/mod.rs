//! Mock Naozi backend for integration tests
//!
//! A small HTTP server that simulates the Apps Script deployment: every
//! logical operation is multiplexed over one URL via the `endpoint` query
//! parameter (GET) or JSON body field (POST), and responses always carry a
//! `success` flag. It can also reproduce the Apps Script redirect quirk,
//! answering the first request with a redirect stub whose body is not JSON.
//!
//! Every request is recorded so tests can assert call counts, ordering,
//! and payload contents.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use chrono::{Duration, Utc};
use serde_json::{json, Value};

/// Configuration for mock backend behavior
#[derive(Debug, Clone, Default)]
pub struct MockBackendConfig {
    /// Answer the first request to any endpoint with a redirect stub
    pub redirect_stub: bool,
    /// Make the upload endpoint report failure
    pub fail_upload: bool,
}

/// One request as the server saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub endpoint: String,
    pub body: Option<Value>,
}

/// Mock backend server handle
pub struct MockBackendServer {
    port: u16,
    running: Arc<AtomicBool>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

impl MockBackendServer {
    /// Start a new mock backend on a random available port
    pub fn start(config: MockBackendConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
        let requests_clone = requests.clone();
        let order_counter = Arc::new(AtomicUsize::new(1000));

        // Non-blocking accept loop for graceful shutdown
        listener.set_nonblocking(true)?;

        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let cfg = config.clone();
                        let log = requests_clone.clone();
                        let counter = order_counter.clone();
                        thread::spawn(move || {
                            handle_connection(stream, &cfg, &log, &counter);
                        });
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(10));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            requests,
            thread_handle: Some(thread_handle),
        })
    }

    /// The single multiplexed URL of this deployment
    pub fn api_url(&self) -> String {
        format!("http://127.0.0.1:{}/exec", self.port)
    }

    /// All requests handled so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockBackendServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn handle_connection(
    mut stream: TcpStream,
    config: &MockBackendConfig,
    log: &Mutex<Vec<RecordedRequest>>,
    order_counter: &AtomicUsize,
) {
    let Some((method, path, body_bytes)) = read_request(&mut stream) else {
        send_response(&mut stream, 400, "Bad Request", r#"{"success":false}"#);
        return;
    };

    let (bare_path, query) = match path.split_once('?') {
        Some((p, q)) => (p.to_string(), Some(q.to_string())),
        None => (path.clone(), None),
    };

    let body: Option<Value> = if body_bytes.is_empty() {
        None
    } else {
        serde_json::from_slice(&body_bytes).ok()
    };

    let endpoint = endpoint_of(query.as_deref(), body.as_ref());

    log.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        endpoint: endpoint.clone(),
        body: body.clone(),
    });

    // Apps Script answers the first request with a redirect stub whose body
    // is not usable JSON; the real payload only comes from the target URL.
    if config.redirect_stub && !bare_path.ends_with("/final") {
        let location = match &query {
            Some(q) => format!("/exec/final?{}", q),
            None => "/exec/final".to_string(),
        };
        send_redirect(&mut stream, &location);
        return;
    }

    let reply = match endpoint.as_str() {
        "test" => json!({"success": true, "message": "Naozi API is running"}),
        "init" => json!({"success": true, "message": "Sheets initialized"}),
        "register" => handle_register(body.as_ref()),
        "login" => handle_login(body.as_ref()),
        "services" => json!({
            "success": true,
            "services": [
                {"id": "svc-1", "name": "Business Cards", "price": 50000},
                {"id": "svc-2", "name": "Brochures", "price": 120000},
                {"id": "svc-3", "name": "Banners", "price": 95000}
            ]
        }),
        "upload" => {
            if config.fail_upload {
                json!({"success": false, "message": "Drive quota exceeded"})
            } else {
                json!({
                    "success": true,
                    "fileUrl": "https://drive.google.com/file/d/mock-upload/view"
                })
            }
        }
        "order" => {
            let id = order_counter.fetch_add(1, Ordering::SeqCst);
            json!({"success": true, "orderId": format!("ORD-{}", id)})
        }
        "orders" => handle_orders(query.as_deref()),
        _ => json!({"success": false, "message": "Unknown endpoint"}),
    };

    send_response(&mut stream, 200, "OK", &reply.to_string());
}

fn handle_register(body: Option<&Value>) -> Value {
    let email = body
        .and_then(|b| b.get("email"))
        .and_then(|v| v.as_str())
        .unwrap_or("");
    if email == "taken@example.com" {
        json!({"success": false, "message": "Email already registered"})
    } else {
        json!({"success": true, "message": "Registration successful"})
    }
}

fn handle_login(body: Option<&Value>) -> Value {
    let email = body
        .and_then(|b| b.get("email"))
        .and_then(|v| v.as_str())
        .unwrap_or("");
    let password = body
        .and_then(|b| b.get("password"))
        .and_then(|v| v.as_str())
        .unwrap_or("");

    if password == "secret" {
        json!({
            "success": true,
            "user": {"id": "u-1", "name": "Budi Santoso", "email": email},
            "token": "tok-123"
        })
    } else {
        json!({"success": false, "message": "Invalid email or password"})
    }
}

fn handle_orders(query: Option<&str>) -> Value {
    let user_id = query
        .and_then(|q| {
            q.split('&')
                .find_map(|pair| pair.strip_prefix("userId="))
                .map(str::to_string)
        })
        .unwrap_or_default();

    let today = Utc::now();
    let last_week = today - Duration::days(7);
    json!({
        "success": true,
        "orders": [
            {
                "orderId": "ORD-901",
                "userId": user_id,
                "serviceType": "business-cards",
                "quantity": 200,
                "status": "printing",
                "fileUrl": "https://drive.google.com/file/d/old-upload/view",
                "createdAt": today.to_rfc3339()
            },
            {
                "orderId": "ORD-877",
                "userId": user_id,
                "serviceType": "banners",
                "quantity": 2,
                "status": "done",
                "fileUrl": "",
                "createdAt": last_week.to_rfc3339()
            }
        ]
    })
}

/// Pull the endpoint discriminator out of the query string or JSON body.
fn endpoint_of(query: Option<&str>, body: Option<&Value>) -> String {
    if let Some(q) = query {
        for pair in q.split('&') {
            if let Some(value) = pair.strip_prefix("endpoint=") {
                return value.to_string();
            }
        }
    }
    body.and_then(|b| b.get("endpoint"))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Read one HTTP request: headers, then exactly Content-Length body bytes.
fn read_request(stream: &mut TcpStream) -> Option<(String, String, Vec<u8>)> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];

    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        if buf.len() > 64 * 1024 {
            return None;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let content_length = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body_end = (header_end + content_length).min(buf.len());
    Some((method, path, buf[header_end..body_end].to_vec()))
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn send_redirect(stream: &mut TcpStream, location: &str) {
    // Deliberately not JSON: the stub body must never be surfaced to callers
    let body = "Moved Temporarily";
    let response = format!(
        "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        location,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn send_response(stream: &mut TcpStream, status: u16, status_text: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        status_text,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
