//! In-process HTTP stub for exercising probes against scripted responses.
use std::future::Future;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) struct StubResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
    delay: Option<Duration>,
}

impl StubResponse {
    pub(crate) fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
            body: body.to_string(),
            delay: None,
        }
    }

    pub(crate) fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_owned(), "text/html".to_owned())],
            body: body.to_owned(),
            delay: None,
        }
    }

    pub(crate) fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub(crate) const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone)]
struct Route {
    method: String,
    path: String,
    responses: Vec<StubResponse>,
}

/// Scripted routes. A route answers with its responses in order and keeps
/// repeating the last one. Later routes shadow earlier ones for the same
/// method and path. Unknown routes answer 404.
#[derive(Debug, Default, Clone)]
pub(crate) struct StubRoutes {
    routes: Vec<Route>,
}

impl StubRoutes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(self, method: &str, path: &str, response: StubResponse) -> Self {
        self.sequence(method, path, vec![response])
    }

    pub(crate) fn sequence(
        mut self,
        method: &str,
        path: &str,
        responses: Vec<StubResponse>,
    ) -> Self {
        self.routes.push(Route {
            method: method.to_ascii_uppercase(),
            path: path.to_owned(),
            responses,
        });
        self
    }
}

pub(crate) struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl StubServer {
    pub(crate) fn spawn(routes: StubRoutes) -> Result<Self, String> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .map_err(|err| format!("bind test server failed: {}", err))?;
        let addr = listener
            .local_addr()
            .map_err(|err| format!("server addr failed: {}", err))?;
        listener
            .set_nonblocking(true)
            .map_err(|err| format!("set_nonblocking failed: {}", err))?;

        let (shutdown_tx, shutdown_rx) = mpsc::channel();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let hits = Arc::new(Mutex::new(vec![0usize; routes.routes.len()]));
        let routes = Arc::new(routes);
        let seen = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }
                match listener.accept() {
                    Ok((stream, _)) => {
                        let routes = Arc::clone(&routes);
                        let hits = Arc::clone(&hits);
                        let seen = Arc::clone(&seen);
                        thread::spawn(move || handle_client(stream, &routes, &hits, &seen));
                    }
                    Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            requests,
            shutdown: shutdown_tx,
            thread: Some(handle),
        })
    }

    pub(crate) fn url(&self) -> &str {
        &self.base_url
    }

    /// `METHOD /path` for every request served so far.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// A base URL nothing listens on.
pub(crate) fn refused_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe port failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe port addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

pub(crate) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

fn handle_client(
    mut stream: TcpStream,
    routes: &StubRoutes,
    hits: &Mutex<Vec<usize>>,
    seen: &Mutex<Vec<String>>,
) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some((method, path)) = read_request(&mut stream) else {
        return;
    };
    if let Ok(mut seen) = seen.lock() {
        seen.push(format!("{} {}", method, path));
    }

    let response = select_response(routes, hits, &method, &path)
        .unwrap_or_else(|| StubResponse::json(404, serde_json::json!({"message": "not found"})));
    if let Some(delay) = response.delay {
        thread::sleep(delay);
    }

    let mut head = format!("HTTP/1.1 {} {}\r\n", response.status, reason(response.status));
    for (name, value) in &response.headers {
        head.push_str(name);
        head.push_str(": ");
        head.push_str(value);
        head.push_str("\r\n");
    }
    head.push_str("Content-Length: ");
    head.push_str(&response.body.len().to_string());
    head.push_str("\r\nConnection: close\r\n\r\n");
    if stream.write_all(head.as_bytes()).is_err() {
        return;
    }
    if stream.write_all(response.body.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn select_response(
    routes: &StubRoutes,
    hits: &Mutex<Vec<usize>>,
    method: &str,
    path: &str,
) -> Option<StubResponse> {
    let (idx, route) = routes
        .routes
        .iter()
        .enumerate()
        .rev()
        .find(|(_, route)| route.method == method && route.path == path)?;
    let mut hits = hits.lock().ok()?;
    let count = hits.get(idx).copied().unwrap_or(0);
    if let Some(slot) = hits.get_mut(idx) {
        *slot = count.saturating_add(1);
    }
    route
        .responses
        .get(count)
        .or_else(|| route.responses.last())
        .cloned()
}

fn read_request(stream: &mut TcpStream) -> Option<(String, String)> {
    let mut data = Vec::new();
    let mut buffer = [0u8; 4096];
    let header_end = loop {
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            return None;
        }
        data.extend_from_slice(buffer.get(..read)?);
        if let Some(pos) = data.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos.saturating_add(4);
        }
    };

    let head = String::from_utf8_lossy(data.get(..header_end)?).into_owned();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    let mut body_len = data.len().saturating_sub(header_end);
    while body_len < content_length {
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            break;
        }
        body_len = body_len.saturating_add(read);
    }

    let mut request_line = head.lines().next()?.split_whitespace();
    let method = request_line.next()?.to_owned();
    let target = request_line.next()?;
    let path = target.split('?').next().unwrap_or(target).to_owned();
    Some((method, path))
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}

/// A deployment that passes every mandatory check. Upload signing and AI are
/// left unrouted so they answer 404.
pub(crate) fn healthy_target_routes() -> StubRoutes {
    use serde_json::json;

    StubRoutes::new()
        .route(
            "GET",
            "/health",
            StubResponse::json(
                200,
                json!({"status": "OK", "uptime": 360.5, "memory": {"heapUsed": 52_428_800}}),
            )
            .with_header("X-Frame-Options", "DENY"),
        )
        .route(
            "GET",
            "/api/health/database",
            StubResponse::json(200, json!({"connected": true, "responseTime": 4})),
        )
        .route(
            "POST",
            "/api/auth/register",
            StubResponse::json(
                201,
                json!({"success": true, "data": {"token": "stub-token", "user": {"_id": "u1"}}}),
            ),
        )
        .route(
            "GET",
            "/api/auth/profile",
            StubResponse::json(200, json!({"success": true, "data": {"user": {"_id": "u1"}}})),
        )
        .route(
            "POST",
            "/api/auth/login",
            StubResponse::json(200, json!({"success": true, "data": {"token": "stub-token"}})),
        )
        .route(
            "OPTIONS",
            "/api/auth/login",
            StubResponse::text(204, "")
                .with_header("Access-Control-Allow-Origin", "http://localhost:5173"),
        )
        .route(
            "POST",
            "/api/capsules",
            StubResponse::json(201, json!({"success": true, "data": {"capsule": {"_id": "c1"}}})),
        )
        .route(
            "POST",
            "/api/memories",
            StubResponse::json(201, json!({"success": true, "data": {"memory": {"_id": "m1"}}})),
        )
        .route(
            "GET",
            "/api/memories/capsule/c1",
            StubResponse::json(
                200,
                json!({"success": true, "data": {"memories": [{"_id": "m1"}]}}),
            ),
        )
        .route("GET", "/socket.io/", StubResponse::text(200, "ok"))
        .route(
            "GET",
            "/",
            StubResponse::text(
                200,
                "<!doctype html><html><head><title>Capsule</title>\
                 <meta name=\"viewport\" content=\"width=device-width\"></head>\
                 <body><div id=\"root\"></div></body></html>",
            ),
        )
}
