//! Static asset server for the browser build of the visualizer.
//!
//! One fixed mapping: request path to file under a document root, with a
//! three-entry content-type table. No traversal protection and no caching
//! headers; this is a development convenience, not a public server.

use futures::Future;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::service::service_fn_ok;
use hyper::{Body, Request, Response, Server, StatusCode};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Content type by file extension (lowercased); anything outside the table
/// is served as a generic binary.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        _ => "application/octet-stream",
    }
}

/// Map a request path to a file under `root`. A bare `/` serves the index
/// page.
pub fn resolve_path(root: &Path, request_path: &str) -> PathBuf {
    let relative = request_path.trim_start_matches('/');
    if relative.is_empty() {
        root.join("index.html")
    } else {
        root.join(relative)
    }
}

/// Build the status, optional content type, and body for one request.
///
/// Kept free of hyper types so it can be unit tested without a socket.
pub fn respond(root: &Path, request_path: &str) -> (StatusCode, Option<&'static str>, Vec<u8>) {
    let file_path = resolve_path(root, request_path);
    match fs::read(&file_path) {
        Ok(content) => (StatusCode::OK, Some(content_type_for(&file_path)), content),
        Err(_) => (StatusCode::NOT_FOUND, None, b"file not found".to_vec()),
    }
}

fn respond_http(root: &Path, request: &Request<Body>) -> Response<Body> {
    let (status, content_type, body) = respond(root, request.uri().path());
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    if let Some(mime) = content_type {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(mime));
    }
    response
}

/// Serve `root` on `addr` until the process is killed.
pub fn serve(addr: SocketAddr, root: PathBuf) {
    println!("Serving {} on http://{}", root.display(), addr);

    let make_service = move || {
        let root = root.clone();
        service_fn_ok(move |request: Request<Body>| respond_http(&root, &request))
    };

    let server = Server::bind(&addr)
        .serve(make_service)
        .map_err(|e| eprintln!("Server error: {}", e));

    hyper::rt::run(server);
}
