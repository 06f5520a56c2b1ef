use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Story {
  #[allow(dead_code)]
  pub(crate) id: u64,
  #[serde(default)]
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}
