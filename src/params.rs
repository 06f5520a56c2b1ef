use super::*;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub(crate) struct StoryCountParams {
  #[schemars(description = "Number of stories to list", range(min = 1, max = 100))]
  pub(crate) n: usize,
}

impl StoryCountParams {
  // The schema declares the bounds, but nothing enforces them before
  // dispatch, so the check runs again here ahead of any upstream fetch.
  pub(crate) fn validated(&self) -> Result<usize, Error> {
    if (1..=100).contains(&self.n) {
      Ok(self.n)
    } else {
      Err(Error::InvalidParameter { n: self.n })
    }
  }
}
