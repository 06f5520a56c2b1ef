use super::*;

pub(crate) fn listing(count: usize, stories: &[Story]) -> Vec<Content> {
  let mut blocks = Vec::with_capacity(stories.len() + 1);

  blocks.push(Content::text(format!(
    "Here are the latest {count} stories from Hacker News:"
  )));

  for story in stories {
    blocks.push(Content::text(story.title.clone()));
  }

  blocks
}

pub(crate) fn summary(count: usize, stories: &[Story]) -> Vec<Content> {
  let mut blocks = Vec::with_capacity(stories.len() + 1);

  blocks.push(Content::text(format!(
    "Here are the latest {count} stories from Hacker News and their URLs:"
  )));

  for story in stories {
    // Text-only posts have no url; they still get a link block, carrying an
    // empty uri rather than being dropped.
    let uri = story.url.clone().unwrap_or_default();

    blocks.push(
      RawContent::ResourceLink(RawResource::new(uri, story.title.clone()))
        .no_annotation(),
    );
  }

  blocks
}
