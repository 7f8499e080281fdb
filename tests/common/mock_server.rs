//! Mock listing endpoint backed by tiny_http

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Start a local HTTP server that returns a canned listing response.
///
/// Returns (stop_sender, url) - send to stop_sender to shut down the server.
pub fn start_mock_listing_server(status: u16, body: &str) -> (mpsc::Sender<()>, String) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("Failed to start test server");
    let port = server.server_addr().to_ip().unwrap().port();
    let url = format!("http://127.0.0.1:{}/api/path/", port);

    let (stop_tx, stop_rx) = mpsc::channel::<()>();

    let body = body.to_string();
    thread::spawn(move || loop {
        if stop_rx.try_recv().is_ok() {
            break;
        }

        match server.recv_timeout(Duration::from_millis(100)) {
            Ok(Some(request)) => {
                let response = tiny_http::Response::from_string(body.clone())
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .unwrap(),
                    );
                let _ = request.respond(response);
            }
            Ok(None) => {}
            Err(_) => break,
        }
    });

    (stop_tx, url)
}

/// URL of a local port with nothing listening on it
pub fn refused_url() -> String {
    // Bind then drop to find a free port
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/path/", port)
}
