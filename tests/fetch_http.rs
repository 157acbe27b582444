// tests/fetch_http.rs
//
// reqwest path against a one-shot HTTP/1.1 listener on localhost.
//
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use grid_carbon::config::options::ApiOptions;
use grid_carbon::error::GridError;
use grid_carbon::net::Fetcher;
use serde_json::json;

/// Serve one request with `status` + `body`; hand back the request head lines.
fn serve_once(status: &str, body: &str) -> (String, mpsc::Receiver<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();
    let status = status.to_string();
    let body = body.to_string();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut head = Vec::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 {
                break;
            }
            let line = line.trim_end().to_string();
            if line.is_empty() {
                break;
            }
            head.push(line);
        }
        let mut stream = stream;
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();
        tx.send(head).unwrap();
    });

    (base, rx)
}

fn options(base: &str) -> ApiOptions {
    ApiOptions {
        base_url: base.to_string(),
        timeout: Some(Duration::from_secs(10)),
        system_proxy: false,
        ..ApiOptions::default()
    }
}

#[test]
fn sends_get_with_auth_header() {
    let (base, rx) = serve_once("200 OK", r#"{"zone":"US-NEISO","carbonIntensity":0}"#);
    let fetcher = Fetcher::from_options(&options(&base), Some("secret".into())).unwrap();

    let json = fetcher.fetch_reading("carbon-intensity", "US-NEISO").unwrap();
    assert_eq!(json, json!({ "zone": "US-NEISO", "carbonIntensity": 0 }));

    let head = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    assert_eq!(head[0], "GET /v3/carbon-intensity/latest?zone=US-NEISO HTTP/1.1");
    assert!(head.iter().any(|l| l.eq_ignore_ascii_case("auth-token: secret")));
    assert!(head.iter().any(|l| l.to_ascii_lowercase().starts_with("user-agent: grid_carbon/")));
}

#[test]
fn server_error_body_is_returned() {
    let (base, _rx) = serve_once("503 Service Unavailable", r#"{"message":"busy"}"#);
    let fetcher = Fetcher::from_options(&options(&base), None).unwrap();

    let json = fetcher.fetch_reading("electricity-mix", "CM").unwrap();
    assert_eq!(json, json!({ "message": "busy" }));
}

#[test]
fn non_json_body_is_decode_error() {
    let (base, _rx) = serve_once("200 OK", "not json");
    let fetcher = Fetcher::from_options(&options(&base), None).unwrap();

    let err = fetcher.fetch_reading("carbon-intensity", "CM").unwrap_err();
    assert!(matches!(err, GridError::Decode(_)));
}

#[test]
fn refused_connection_is_network_error() {
    // Bind then drop to get a port nobody listens on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let base = format!("http://127.0.0.1:{port}");
    let fetcher = Fetcher::from_options(&options(&base), None).unwrap();

    let err = fetcher.fetch_reading("carbon-intensity", "CM").unwrap_err();
    assert!(matches!(err, GridError::Network(_)));
}
