use {
  axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
  },
  serde_json::Value,
  std::{
    collections::HashMap,
    sync::{
      Arc,
      atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
  },
  tokio::net::TcpListener,
};

#[derive(Clone, Default)]
pub(crate) struct MockUpstream {
  ids: Vec<u64>,
  item_hits: Arc<AtomicUsize>,
  items: HashMap<u64, Value>,
  latencies: HashMap<u64, Duration>,
  top_hits: Arc<AtomicUsize>,
}

impl MockUpstream {
  pub(crate) fn ids(mut self, ids: &[u64]) -> Self {
    self.ids = ids.to_vec();
    self
  }

  pub(crate) fn item(mut self, id: u64, item: Value) -> Self {
    self.items.insert(id, item);
    self
  }

  pub(crate) fn item_hits(&self) -> usize {
    self.item_hits.load(Ordering::SeqCst)
  }

  pub(crate) fn latency(mut self, id: u64, latency: Duration) -> Self {
    self.latencies.insert(id, latency);
    self
  }

  pub(crate) async fn serve(&self) -> String {
    let app = Router::new()
      .route("/topstories.json", get(top_stories))
      .route("/item/{id}", get(item))
      .with_state(self.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
      axum::serve(listener, app).await.unwrap();
    });

    format!("http://{address}")
  }

  pub(crate) fn top_hits(&self) -> usize {
    self.top_hits.load(Ordering::SeqCst)
  }
}

async fn item(
  State(upstream): State<MockUpstream>,
  Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
  upstream.item_hits.fetch_add(1, Ordering::SeqCst);

  let id = id
    .strip_suffix(".json")
    .and_then(|id| id.parse::<u64>().ok())
    .ok_or(StatusCode::BAD_REQUEST)?;

  if let Some(latency) = upstream.latencies.get(&id) {
    tokio::time::sleep(*latency).await;
  }

  upstream
    .items
    .get(&id)
    .cloned()
    .map(Json)
    .ok_or(StatusCode::NOT_FOUND)
}

async fn top_stories(State(upstream): State<MockUpstream>) -> Json<Vec<u64>> {
  upstream.top_hits.fetch_add(1, Ordering::SeqCst);

  Json(upstream.ids.clone())
}
