use {
  anyhow::Context,
  client::Client,
  error::Error,
  futures::stream::{self, StreamExt},
  params::StoryCountParams,
  rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
      AnnotateAble, CallToolResult, Content, Implementation, RawContent,
      RawResource, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    transport::io::stdio,
  },
  serde::Deserialize,
  server::Server,
  std::{backtrace::BacktraceStatus, process},
  story::Story,
  tokio::signal,
  tracing_subscriber::EnvFilter,
};

mod blocks;
mod client;
mod error;
#[cfg(test)]
mod mock_upstream;
mod params;
mod server;
mod story;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .with_ansi(false)
    .init();

  let service = Server::new(Client::default())
    .serve(stdio())
    .await
    .context("failed to start mcp server")?;

  tracing::info!("hn-mcp server running on stdio");

  tokio::select! {
    result = service.waiting() => {
      result.context("mcp server terminated unexpectedly")?;
    }
    () = shutdown_signal() => {
      tracing::info!("received termination signal, shutting down");
    }
  }

  Ok(())
}

async fn shutdown_signal() {
  let interrupt = async {
    signal::ctrl_c()
      .await
      .expect("failed to install interrupt handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("failed to install terminate handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = interrupt => {}
    () = terminate => {}
  }
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    eprintln!("error: {error}");

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {error}");
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      eprintln!("backtrace:");
      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
