use crate::core::TdError;

/// Read the response body as text, failing with [`TdError::Status`] when the
/// status is not 2xx. Both endpoint families funnel through this so every
/// non-success response carries the status code and the raw body.
pub(crate) async fn read_body(resp: reqwest::Response) -> Result<String, TdError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(TdError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
