//! Client for the external code-execution service
//!
//! One `evaluate` call performs one blocking round-trip to a
//! Judge0-compatible service (`wait=true`). The client never retries: a
//! retry would re-execute the user's code, and callers may already have
//! persisted state that reflects the first execution.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::JudgeConfig;

use super::verdict::StatusKind;

/// Errors from a single judge round-trip.
#[derive(Debug, Clone, thiserror::Error)]
pub enum JudgeError {
    #[error("judge service unavailable: {0}")]
    Unavailable(String),

    #[error("judge request timed out after {0:?}")]
    Timeout(Duration),

    #[error("malformed judge response: {0}")]
    Protocol(String),
}

/// Result of evaluating one test case, before the dispatcher assigns an index.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub status: StatusKind,
    pub stdout: String,
    pub stderr: String,
    pub compile_output: String,
    pub time_ms: f64,
}

/// Seam to the external execution service.
#[async_trait]
pub trait Judge: Send + Sync {
    /// Execute `source_code` against one stdin/expected-output pair.
    async fn evaluate(
        &self,
        language_id: i32,
        source_code: &str,
        stdin: &str,
        expected_output: &str,
    ) -> Result<CaseResult, JudgeError>;
}

/// Request body for the judge service.
#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    language_id: i32,
    source_code: &'a str,
    stdin: &'a str,
    expected_output: &'a str,
}

/// Response body from the judge service.
///
/// Every field except `status` is optional on the wire, and `time` arrives
/// as a numeric string in seconds-resolution units.
#[derive(Debug, Deserialize)]
struct WireResponse {
    status: Option<WireStatus>,
    #[serde(default)]
    stdout: Option<String>,
    #[serde(default)]
    stderr: Option<String>,
    #[serde(default)]
    compile_output: Option<String>,
    #[serde(default)]
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireStatus {
    description: String,
}

impl WireResponse {
    /// Convert the wire shape into a `CaseResult`, tolerating absent fields.
    fn into_case_result(self) -> Result<CaseResult, JudgeError> {
        let status = self
            .status
            .ok_or_else(|| JudgeError::Protocol("response missing status".to_string()))?;

        let time_ms = self
            .time
            .as_deref()
            .and_then(|t| t.parse::<f64>().ok())
            .unwrap_or(0.0);

        Ok(CaseResult {
            status: StatusKind::from_description(&status.description),
            stdout: self.stdout.unwrap_or_default(),
            stderr: self.stderr.unwrap_or_default(),
            compile_output: self.compile_output.unwrap_or_default(),
            time_ms,
        })
    }
}

/// HTTP client for a Judge0-compatible service.
pub struct HttpJudgeClient {
    http: reqwest::Client,
    submissions_url: String,
    api_key: String,
    api_host: String,
    request_timeout: Duration,
}

impl HttpJudgeClient {
    /// Build a client from configuration.
    pub fn new(config: &JudgeConfig) -> Result<Self, JudgeError> {
        let request_timeout = Duration::from_secs(config.request_timeout_secs);

        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| JudgeError::Unavailable(e.to_string()))?;

        Ok(Self {
            http,
            submissions_url: format!(
                "{}/submissions?base64_encoded=false&wait=true",
                config.url.trim_end_matches('/')
            ),
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
            request_timeout,
        })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> JudgeError {
        if err.is_timeout() {
            JudgeError::Timeout(self.request_timeout)
        } else if err.is_decode() {
            JudgeError::Protocol(err.to_string())
        } else {
            JudgeError::Unavailable(err.to_string())
        }
    }
}

#[async_trait]
impl Judge for HttpJudgeClient {
    async fn evaluate(
        &self,
        language_id: i32,
        source_code: &str,
        stdin: &str,
        expected_output: &str,
    ) -> Result<CaseResult, JudgeError> {
        let body = WireRequest {
            language_id,
            source_code,
            stdin,
            expected_output,
        };

        let response = self
            .http
            .post(&self.submissions_url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            return Err(JudgeError::Unavailable(format!(
                "judge service returned {}",
                response.status()
            )));
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| JudgeError::Protocol(e.to_string()))?;

        tracing::debug!(
            language_id,
            time = ?wire.time,
            status = wire.status.as_ref().map(|s| s.description.as_str()),
            "Judge round-trip complete"
        );

        wire.into_case_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<CaseResult, JudgeError> {
        serde_json::from_str::<WireResponse>(json)
            .map_err(|e| JudgeError::Protocol(e.to_string()))?
            .into_case_result()
    }

    #[test]
    fn test_full_response() {
        let result = parse(
            r#"{
                "status": {"description": "Accepted"},
                "stdout": "3\n",
                "stderr": "",
                "compile_output": null,
                "time": "0.05"
            }"#,
        )
        .unwrap();

        assert_eq!(result.status, StatusKind::Accepted);
        assert_eq!(result.stdout, "3\n");
        assert_eq!(result.compile_output, "");
        assert_eq!(result.time_ms, 0.05);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let result = parse(r#"{"status": {"description": "Wrong Answer"}}"#).unwrap();

        assert_eq!(result.status, StatusKind::WrongAnswer);
        assert_eq!(result.stdout, "");
        assert_eq!(result.stderr, "");
        assert_eq!(result.time_ms, 0.0);
    }

    #[test]
    fn test_unparseable_time_defaults_to_zero() {
        let result =
            parse(r#"{"status": {"description": "Accepted"}, "time": "n/a"}"#).unwrap();
        assert_eq!(result.time_ms, 0.0);
    }

    #[test]
    fn test_missing_status_is_protocol_error() {
        let err = parse(r#"{"stdout": "3\n"}"#).unwrap_err();
        assert!(matches!(err, JudgeError::Protocol(_)));
    }

    #[test]
    fn test_runtime_error_description_with_signal() {
        let result =
            parse(r#"{"status": {"description": "Runtime Error (NZEC)"}, "time": "0.02"}"#)
                .unwrap();
        assert_eq!(result.status, StatusKind::RuntimeError);
    }
}
