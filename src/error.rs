use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("parameter `n` must be an integer between 1 and 100, got {n}")]
  InvalidParameter { n: usize },
  #[error("hacker news api is unavailable: {0}")]
  UpstreamUnavailable(#[from] reqwest::Error),
}

impl From<Error> for McpError {
  fn from(error: Error) -> Self {
    let message = error.to_string();

    match error {
      Error::InvalidParameter { n } => {
        Self::invalid_params(message, Some(serde_json::json!({ "n": n })))
      }
      Error::UpstreamUnavailable(_) => Self::internal_error(message, None),
    }
  }
}
