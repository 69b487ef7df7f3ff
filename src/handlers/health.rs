// GET /
pub async fn liveness() -> &'static str {
    "ServeNow API is running"
}
