use url::Url;

use crate::core::{FinClient, FinError};

/// Issue a GET for `url` and return the response body as text.
///
/// Non-success statuses are mapped to [`FinError::Status`]; transport
/// failures propagate opaquely as [`FinError::Http`].
pub(crate) async fn get_text(client: &FinClient, url: &Url) -> Result<String, FinError> {
    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FinError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(resp.text().await?)
}
