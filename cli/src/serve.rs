//! Local preview server.
//!
//! A tiny HTTP/1.1 responder: the page is rendered once up
//! front, each connection gets exactly one response and is closed.

use crate::error::CliError;
use crate::render::stylesheet_path;
use seagro_site::styles::PAGE_CSS;
use seagro_site::{PageOptions, render_page};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

/// Default stylesheet route, always served.
const STYLES_ROUTE: &str = "/styles.css";

/// Upper bound on the request line plus headers.
const MAX_HEAD_BYTES: u64 = 8 * 1024;

/// How long a client may take to send its request head.
const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Pre-rendered responses for the preview server.
#[derive(Debug)]
pub struct Site {
    page: String,
    stylesheet_route: Option<String>,
}

impl Site {
    /// Render the page and work out the linked stylesheet's route, if local.
    pub fn new(options: &PageOptions) -> Result<Self, CliError> {
        let stylesheet_route = stylesheet_path(&options.style)?.map(|path| {
            let route = path.to_string_lossy().replace('\\', "/");
            format!("/{route}")
        });

        Ok(Self {
            page: render_page(options),
            stylesheet_route,
        })
    }

    /// Map a request line (`GET /path HTTP/1.1`) to a response.
    pub fn respond(&self, request_line: &str) -> Response<'_> {
        let mut parts = request_line.split_whitespace();
        let (Some(method), Some(target)) = (parts.next(), parts.next()) else {
            return Response::bad_request();
        };

        if method != "GET" && method != "HEAD" {
            return Response::text(405, "Method Not Allowed");
        }

        let path = target.split(['?', '#']).next().unwrap_or(target);
        let mut response = match path {
            "/" | "/index.html" => Response::ok("text/html; charset=utf-8", &self.page),
            STYLES_ROUTE => Response::ok("text/css; charset=utf-8", PAGE_CSS),
            p if self.stylesheet_route.as_deref() == Some(p) => {
                Response::ok("text/css; charset=utf-8", PAGE_CSS)
            }
            _ => Response::text(404, "Not Found"),
        };
        response.head_only = method == "HEAD";
        response
    }
}

/// A single HTTP response, borrowed from the pre-rendered [`Site`].
#[derive(Debug, PartialEq, Eq)]
pub struct Response<'a> {
    pub status: u16,
    pub content_type: &'static str,
    pub body: &'a str,
    pub head_only: bool,
}

impl<'a> Response<'a> {
    fn ok(content_type: &'static str, body: &'a str) -> Self {
        Self {
            status: 200,
            content_type,
            body,
            head_only: false,
        }
    }

    fn text(status: u16, body: &'static str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body,
            head_only: false,
        }
    }

    fn bad_request() -> Self {
        Self::text(400, "Bad Request")
    }

    fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            _ => "Internal Server Error",
        }
    }

    /// Serialize as an HTTP/1.1 message.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n",
            self.status,
            self.reason(),
            self.content_type,
            self.body.len(),
        );
        if self.status == 405 {
            out.push_str("Allow: GET, HEAD\r\n");
        }
        out.push_str("\r\n");
        if !self.head_only {
            out.push_str(self.body);
        }
        out.into_bytes()
    }
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, options: &PageOptions) -> Result<(), CliError> {
    let site = Arc::new(Site::new(options)?);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| CliError::Bind { addr, source })?;
    let local = listener.local_addr().unwrap_or(addr);
    info!("Serving SeaGro landing page on http://{local}/ (Ctrl-C to stop)");

    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "could not listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };
    run(listener, site, shutdown).await;

    info!("Preview server stopped");
    Ok(())
}

/// Accept connections on `listener` until `shutdown` resolves.
pub async fn run(listener: TcpListener, site: Arc<Site>, shutdown: impl Future<Output = ()>) {
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            () = &mut shutdown => break,
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(err) => {
                        warn!(error = %err, "accept failed");
                        continue;
                    }
                };
                let site = Arc::clone(&site);
                tokio::spawn(async move {
                    if let Err(err) = handle_connection(stream, &site).await {
                        debug!(%peer, error = %err, "connection dropped");
                    }
                });
            }
        }
    }
}

/// Read the request line and drain the headers; the body (if any) is
/// ignored. `None` when the head is not UTF-8 or overruns [`MAX_HEAD_BYTES`].
async fn read_head<R: AsyncBufRead + Unpin>(reader: R) -> io::Result<Option<String>> {
    let mut reader = reader.take(MAX_HEAD_BYTES);

    let mut request_line = Vec::new();
    reader.read_until(b'\n', &mut request_line).await?;

    let mut header = Vec::new();
    loop {
        header.clear();
        let n = reader.read_until(b'\n', &mut header).await?;
        if n == 0 {
            if reader.limit() == 0 {
                return Ok(None);
            }
            break;
        }
        if header.trim_ascii().is_empty() {
            break;
        }
    }

    Ok(String::from_utf8(request_line).ok())
}

async fn handle_connection(stream: TcpStream, site: &Site) -> io::Result<()> {
    let mut reader = BufReader::new(stream);

    let head = tokio::time::timeout(READ_TIMEOUT, read_head(&mut reader))
        .await
        .map_err(|_| io::Error::from(io::ErrorKind::TimedOut))??;

    let response = match &head {
        Some(line) => site.respond(line.trim_end()),
        None => Response::bad_request(),
    };
    debug!(request = ?head.as_deref().map(str::trim_end), status = response.status, "request");

    let mut stream = reader.into_inner();
    stream.write_all(&response.to_bytes()).await?;
    stream.shutdown().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use seagro_site::StyleMode;
    use tokio::sync::oneshot;
    use tokio::task::JoinHandle;

    fn site() -> Site {
        Site::new(&PageOptions::default()).expect("site")
    }

    fn linked(href: &str) -> PageOptions {
        PageOptions {
            style: StyleMode::Linked(href.into()),
            ..Default::default()
        }
    }

    async fn start(site: Site) -> (SocketAddr, oneshot::Sender<()>, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let shutdown = async move {
            let _ = stop_rx.await;
        };

        let server = tokio::spawn(run(listener, Arc::new(site), shutdown));
        (addr, stop_tx, server)
    }

    async fn exchange(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
        let mut client = TcpStream::connect(addr).await.expect("connect");
        client.write_all(request).await.expect("send request");
        let mut raw = Vec::new();
        client.read_to_end(&mut raw).await.expect("read response");
        raw
    }

    #[test]
    fn serves_page_at_root_and_index() {
        let site = site();
        for line in [
            "GET / HTTP/1.1",
            "GET /index.html HTTP/1.1",
            "GET /?ref=mail HTTP/1.1",
        ] {
            let response = site.respond(line);
            assert_eq!(response.status, 200, "{line}");
            assert!(response.content_type.starts_with("text/html"));
            assert!(response.body.contains("Connect. Learn. Grow."));
        }
    }

    #[test]
    fn serves_default_stylesheet() {
        let site = site();
        let response = site.respond("GET /styles.css HTTP/1.1");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, PAGE_CSS);
    }

    #[test]
    fn serves_configured_stylesheet_route() {
        let site = Site::new(&linked("./css/site.css")).expect("site");
        assert_eq!(site.respond("GET /css/site.css HTTP/1.1").status, 200);
        assert!(site.page.contains(r#"href="./css/site.css""#));
    }

    #[test]
    fn versioned_stylesheet_is_served_without_query() {
        let site = Site::new(&linked("css/site.css?v=3")).expect("site");
        let response = site.respond("GET /css/site.css?v=3 HTTP/1.1");
        assert_eq!(response.content_type, "text/css; charset=utf-8");
        assert_eq!(response.body, PAGE_CSS);
    }

    #[test]
    fn stylesheet_over_the_page_is_refused() {
        for href in ["index.html", "./index.html?v=2"] {
            let err = Site::new(&linked(href)).unwrap_err();
            assert!(matches!(err, CliError::StylesheetClash { .. }), "{href}");
        }
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(site().respond("GET /jobs HTTP/1.1").status, 404);
    }

    #[test]
    fn non_get_is_rejected() {
        let site = site();
        let response = site.respond("POST / HTTP/1.1");
        assert_eq!(response.status, 405);
        let raw = String::from_utf8(response.to_bytes()).unwrap();
        assert!(raw.contains("Allow: GET, HEAD\r\n"));
    }

    #[test]
    fn garbage_request_is_bad_request() {
        assert_eq!(site().respond("").status, 400);
    }

    #[test]
    fn head_omits_body_but_keeps_length() {
        let site = site();
        let response = site.respond("HEAD / HTTP/1.1");
        let raw = String::from_utf8(response.to_bytes()).unwrap();

        let length = format!("Content-Length: {}\r\n", site.page.len());
        assert!(raw.ends_with("\r\n\r\n"));
        assert!(raw.contains(&length));
    }

    #[tokio::test]
    async fn read_head_returns_request_line() {
        let raw: &[u8] = b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\nbody";
        let head = read_head(raw).await.expect("read");
        assert_eq!(head.as_deref(), Some("GET / HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn read_head_rejects_invalid_utf8() {
        let raw: &[u8] = b"G\xffT / HTTP/1.1\r\n\r\n";
        assert_eq!(read_head(raw).await.expect("read"), None);
    }

    #[tokio::test]
    async fn read_head_rejects_oversized_head() {
        let mut raw = b"GET / HTTP/1.1\r\nX-Padding: ".to_vec();
        raw.resize(raw.len() + MAX_HEAD_BYTES as usize, b'a');
        raw.extend_from_slice(b"\r\n\r\n");

        assert_eq!(read_head(raw.as_slice()).await.expect("read"), None);
    }

    #[tokio::test]
    async fn answers_over_tcp_and_stops_on_shutdown() {
        let (addr, stop_tx, server) = start(site()).await;

        let raw = exchange(addr, b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        let raw = String::from_utf8(raw).expect("utf-8 response");

        assert!(raw.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(raw.contains("Connection: close\r\n"));
        assert!(raw.contains("<!DOCTYPE html>"));

        stop_tx.send(()).expect("server still running");
        server.await.expect("server task");
    }

    #[tokio::test]
    async fn non_utf8_request_gets_bad_request_over_tcp() {
        let (addr, stop_tx, server) = start(site()).await;

        let raw = exchange(addr, b"G\xffT / HTTP/1.1\r\n\r\n").await;

        assert!(raw.starts_with(b"HTTP/1.1 400 Bad Request\r\n"));

        stop_tx.send(()).expect("server still running");
        server.await.expect("server task");
    }
}
