use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self::new(Client::API_BASE_URL.into())
  }
}

impl Client {
  const API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

  pub(crate) async fn fetch_stories(
    &self,
    count: usize,
  ) -> Result<Vec<Story>, Error> {
    let story_ids = self.fetch_top_story_ids().await?;

    let story_ids = story_ids.into_iter().take(count);

    // `buffered` polls up to 16 fetches at once but yields results in input
    // order, which keeps the output aligned with the upstream ranking.
    let responses = stream::iter(story_ids.map(|id| {
      let client = self.clone();

      async move { client.fetch_story(id).await }
    }))
    .buffered(16)
    .collect::<Vec<_>>()
    .await;

    let mut stories = Vec::with_capacity(responses.len());

    for story in responses {
      stories.push(story?);
    }

    Ok(stories)
  }

  pub(crate) async fn fetch_story(&self, id: u64) -> Result<Story, Error> {
    Ok(
      self
        .client
        .get(format!("{}/item/{id}.json", self.base_url))
        .send()
        .await?
        .json::<Story>()
        .await?,
    )
  }

  pub(crate) async fn fetch_top_story_ids(&self) -> Result<Vec<u64>, Error> {
    Ok(
      self
        .client
        .get(format!("{}/topstories.json", self.base_url))
        .send()
        .await?
        .json::<Vec<u64>>()
        .await?,
    )
  }

  pub(crate) fn new(base_url: String) -> Self {
    Self {
      base_url,
      client: reqwest::Client::new(),
    }
  }
}
