use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Instant;

/// Число с разделителями тысяч (точками): 1234567 → "1.234.567"
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Console line after the timestamp; `size` is `None` when the body could not be read
fn access_line(
    status: StatusCode,
    method: &str,
    path: &str,
    elapsed_ms: u128,
    size: Option<usize>,
) -> String {
    let size = size.map_or_else(|| "error".to_string(), format_number);
    format!(
        "{:>5}ms | {:>12} | {} {:>6} {}",
        elapsed_ms,
        size,
        status.as_u16(),
        method,
        path
    )
}

/// Middleware для логирования HTTP запросов
///
/// Buffers the body to report its real size. Cyan time for 200, yellow otherwise.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (parts, body) = next.run(req).await.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|e| tracing::error!("{} {}: failed to read response body: {}", method, path, e))
        .ok();

    let line = access_line(
        parts.status,
        method.as_str(),
        &path,
        start.elapsed().as_millis(),
        bytes.as_ref().map(|b| b.len()),
    );
    let color = if parts.status == StatusCode::OK && bytes.is_some() {
        "36"
    } else {
        "33"
    };
    println!("\x1b[{}m{}\x1b[0m | {}", color, Local::now().format("%H:%M:%S"), line);

    Response::from_parts(parts, bytes.map(Body::from).unwrap_or_default())
}
