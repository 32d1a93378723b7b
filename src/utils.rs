use axum::http::StatusCode;

pub fn e500<T>(e: T) -> StatusCode
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    tracing::error!(error.cause_chain = ?e, error.message = %e, "Internal Server error");
    StatusCode::INTERNAL_SERVER_ERROR
}
