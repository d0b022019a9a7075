use crate::client::HttpResponse;
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: {}", .0)]
    Parameter(&'static str),
    #[error("Empty response")]
    EmptyResponse(Box<HttpResponse>),
    #[error("Unsuccessful response")]
    UnsuccessfulResponse(Box<HttpResponse>),
    #[error("Previous page has no assets to continue from")]
    MissingCursor,
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    #[error("Invalid URL: {}", .0)]
    UrlParse(#[from] url::ParseError),
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    #[error("Error {}", .0)]
    Http(StatusCode),
    #[error("Request aborted")]
    Aborted,
}

impl Error {
    /// The response attached to this error, if any.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            Self::EmptyResponse(response) |
            Self::UnsuccessfulResponse(response) => Some(response),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

impl From<futures::future::Aborted> for Error {
    fn from(_: futures::future::Aborted) -> Error {
        Error::Aborted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn attaches_response_to_envelope_errors() {
        let response = HttpResponse {
            status: StatusCode::OK,
            body: Some(serde_json::json!({ "success": false })),
        };
        let error = Error::UnsuccessfulResponse(Box::new(response));
        
        assert_eq!(error.response().unwrap().status, StatusCode::OK);
        assert!(Error::MissingCursor.response().is_none());
    }
}
