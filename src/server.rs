use super::*;

#[derive(Clone)]
pub(crate) struct Server {
  client: Client,
  tool_router: ToolRouter<Self>,
}

#[tool_router]
impl Server {
  #[tool(description = "List latest N stories on Hacker News")]
  pub(crate) async fn list_hn_latest_stories(
    &self,
    Parameters(params): Parameters<StoryCountParams>,
  ) -> Result<CallToolResult, McpError> {
    let count = params.validated()?;

    let stories = self.client.fetch_stories(count).await?;

    Ok(CallToolResult::success(blocks::listing(count, &stories)))
  }

  pub(crate) fn new(client: Client) -> Self {
    Self {
      client,
      tool_router: Self::tool_router(),
    }
  }

  #[tool(
    description = "Summarize latest N stories on Hacker News with links to their URLs"
  )]
  pub(crate) async fn summarize_hn_latest_stories(
    &self,
    Parameters(params): Parameters<StoryCountParams>,
  ) -> Result<CallToolResult, McpError> {
    let count = params.validated()?;

    let stories = self.client.fetch_stories(count).await?;

    Ok(CallToolResult::success(blocks::summary(count, &stories)))
  }
}

#[tool_handler]
impl ServerHandler for Server {
  fn get_info(&self) -> ServerInfo {
    ServerInfo {
      capabilities: ServerCapabilities::builder().enable_tools().build(),
      instructions: Some(
        "Hacker News MCP server: list or summarize the current top stories."
          .into(),
      ),
      server_info: Implementation {
        name: env!("CARGO_PKG_NAME").to_string(),
        title: Some("Hacker News MCP Server".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: None,
        icons: None,
        website_url: None,
      },
      ..ServerInfo::default()
    }
  }
}
