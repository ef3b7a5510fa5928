use crate::domain::model::RawRecord;
use crate::utils::error::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Issues one GET to `endpoint` and decodes the body as an array of todos.
///
/// `timeout` bounds the whole exchange, connect and body read included.
pub async fn fetch(
    client: &Client,
    endpoint: &str,
    params: &[(String, String)],
    timeout: Duration,
) -> Result<Vec<RawRecord>, FetchError> {
    println!("\n📡  Fetching data from: {}", endpoint);
    println!("    Parameters        : {}\n", format_params(params));

    tracing::debug!("Making API request to: {} (timeout {:?})", endpoint, timeout);

    let response = client
        .get(endpoint)
        .query(params)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify(endpoint, timeout, e))?;

    let status = response.status();
    tracing::debug!("API response status: {}", status);

    if !status.is_success() {
        return Err(FetchError::Status {
            url: response.url().to_string(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| classify(endpoint, timeout, e))?;
    let records: Vec<RawRecord> = serde_json::from_str(&body)?;

    println!("✅  Success! Received {} records.", records.len());
    Ok(records)
}

fn classify(endpoint: &str, timeout: Duration, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: endpoint.to_string(),
            timeout,
        }
    } else if err.is_connect() {
        FetchError::Connect {
            url: endpoint.to_string(),
            source: err,
        }
    } else {
        FetchError::Request(err)
    }
}

fn format_params(params: &[(String, String)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}
