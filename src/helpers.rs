use crate::error::Error;
use reqwest::header;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde_json::Value;

pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";

pub fn get_default_middleware(
    proxy: Option<reqwest::Proxy>,
    user_agent_string: &'static str,
) -> Result<ClientWithMiddleware, Error> {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
    let mut headers = header::HeaderMap::new();
    
    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));
    
    let mut builder = reqwest::ClientBuilder::new()
        .default_headers(headers);
    
    if let Some(proxy) = proxy {
        builder = builder.proxy(proxy);
    }
    
    let client = builder.build()?;
    
    Ok(ClientBuilder::new(client)
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build())
}

pub async fn check_response(response: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = &response.status();
    
    match status.as_u16() {
        400..=499 => {
            Err(Error::Http(*status))
        },
        500..=599 => {
            Err(Error::Http(*status))
        },
        _ => {
            Ok(response.bytes().await?)
        }
    }
}

/// Whether `value` is truthy in the sense Steam's own scripts use for `success` flags: `true`, 
/// a non-zero number, a non-empty string, or any object or array.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(string) => !string.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reads a number sent either as a JSON number or a numeric string.
pub fn value_to_number<T>(value: &Value) -> Option<T>
where
    T: std::str::FromStr + TryFrom<u64>,
{
    match value {
        Value::Number(number) => number.as_u64().and_then(|n| T::try_from(n).ok()),
        Value::String(string) => string.parse::<T>().ok(),
        _ => None,
    }
}
