/// Uniform wrapper Unifonic puts around every response body.
///
/// `data` is only meaningful when `success` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope<T> {
    pub success: bool,
    pub error_code: Option<i64>,
    pub message: Option<String>,
    pub data: Option<T>,
}
