//! Health check handler

pub async fn health() -> &'static str {
    "OK"
}
