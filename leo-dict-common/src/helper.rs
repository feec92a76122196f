use crate::Error;

pub async fn into_request_failed_error(resp: reqwest::Response) -> Error {
    let status = resp.status();
    let body = resp.text().await;
    match body {
        Ok(message) => Error::RequestAPIFailed {
            status: status.to_string(),
            message,
        },
        Err(e) => Error::Reqwest(e),
    }
}

/// 状态码不是2xx时返回[Error::RequestAPIFailed]，否则读取完整的body
pub async fn read_text_response(resp: reqwest::Response) -> Result<String, Error> {
    if !resp.status().is_success() {
        return Err(into_request_failed_error(resp).await);
    }

    let text = resp.text().await?;
    Ok(text)
}
