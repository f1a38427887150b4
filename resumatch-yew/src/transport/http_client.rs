use crate::config::Config;
use crate::transport::BrowserFile;
use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use resumatch_core::{FileHandle, FormPart, HttpReply, ScoringClient, ScreeningError, ScreeningRequest};
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// Sends screening requests with `fetch`
#[derive(Debug, Clone, PartialEq)]
pub struct HttpScoringClient {
    config: Config,
}

impl HttpScoringClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn js_error(err: JsValue) -> ScreeningError {
    ScreeningError::transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn timeout_message(ms: u32) -> String {
    if ms < 1000 {
        format!("Request timed out after {} ms", ms)
    } else {
        format!("Request timed out after {} seconds", ms.div_ceil(1000))
    }
}

fn to_form_data(request: ScreeningRequest<BrowserFile>) -> Result<FormData, ScreeningError> {
    let form = FormData::new().map_err(js_error)?;

    for part in request.into_parts() {
        match part {
            FormPart::Text { name, value } => form.append_with_str(name, &value),
            FormPart::File { name, file } => {
                form.append_with_blob_and_filename(name, file.as_file(), &file.name())
            }
        }
        .map_err(js_error)?;
    }

    Ok(form)
}

#[async_trait(?Send)]
impl ScoringClient<BrowserFile> for HttpScoringClient {
    async fn send(
        &self,
        request: ScreeningRequest<BrowserFile>,
    ) -> Result<HttpReply, ScreeningError> {
        let form = to_form_data(request)?;

        let request = Request::post(&self.config.api_url)
            .body(form)
            .map_err(|e| ScreeningError::transport(e.to_string()))?;

        tracing::debug!("POST {}", self.config.api_url);

        let pending = Box::pin(request.send());
        let response = match self.config.timeout_ms {
            Some(ms) => match future::select(pending, Box::pin(TimeoutFuture::new(ms))).await {
                Either::Left((response, _)) => response,
                Either::Right(_) => {
                    tracing::error!("Scoring request timed out after {} ms", ms);
                    return Err(ScreeningError::transport(timeout_message(ms)));
                }
            },
            None => pending.await,
        }
        .map_err(|e| ScreeningError::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ScreeningError::transport(e.to_string()))?;

        tracing::debug!("Scoring service answered {} ({} bytes)", status, body.len());

        Ok(HttpReply::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        assert_eq!(timeout_message(250), "Request timed out after 250 ms");
        assert_eq!(timeout_message(120_000), "Request timed out after 120 seconds");
        assert_eq!(timeout_message(1_500), "Request timed out after 2 seconds");
    }
}
