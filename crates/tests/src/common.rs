use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use client::{FieldValue, StatusText, SubmitTrigger};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A request as seen by the stand-in posts endpoint.
#[derive(Debug, Clone)]
pub struct ReceivedPost {
    pub content_type: Option<String>,
    pub raw_body: String,
}

impl ReceivedPost {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.raw_body).expect("Request body should be JSON")
    }
}

/// How the stand-in answers a POST.
#[derive(Debug, Clone, Copy)]
pub struct Reply {
    pub status: StatusCode,
    pub delay: Duration,
}

impl Reply {
    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(status: StatusCode, delay: Duration) -> Self {
        Self { status, delay }
    }
}

#[derive(Clone)]
struct PostsState {
    reply: Reply,
    received: Arc<Mutex<Vec<ReceivedPost>>>,
}

/// Router mimicking json-server's `POST /posts`: records the body and answers
/// with the configured status.
fn posts_router(reply: Reply) -> (Router, Arc<Mutex<Vec<ReceivedPost>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = PostsState {
        reply,
        received: received.clone(),
    };

    let router = Router::new()
        .route("/posts", post(create_post))
        .with_state(state);

    (router, received)
}

async fn create_post(State(state): State<PostsState>, headers: HeaderMap, body: Bytes) -> Response {
    let received = ReceivedPost {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        raw_body: String::from_utf8_lossy(&body).into_owned(),
    };

    let id = {
        let mut posts = state.received.lock().unwrap();
        posts.push(received.clone());
        posts.len()
    };

    if !state.reply.delay.is_zero() {
        tokio::time::sleep(state.reply.delay).await;
    }

    if state.reply.status.is_success() {
        let mut created = serde_json::from_str::<Value>(&received.raw_body).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut created {
            map.insert("id".to_string(), Value::from(id));
        }
        (state.reply.status, Json(created)).into_response()
    } else {
        (state.reply.status, Json(serde_json::json!({ "error": "rejected" }))).into_response()
    }
}

/// A stand-in posts endpoint listening on an ephemeral loopback port.
pub struct PostsServer {
    pub url: String,
    received: Arc<Mutex<Vec<ReceivedPost>>>,
}

impl PostsServer {
    pub fn received(&self) -> Vec<ReceivedPost> {
        self.received.lock().unwrap().clone()
    }
}

pub async fn start_posts_server(reply: Reply) -> PostsServer {
    let (router, received) = posts_router(reply);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });

    PostsServer {
        url: format!("http://{}/posts", addr),
        received,
    }
}

/// URL of a loopback port with nothing listening on it.
pub fn closed_posts_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("Listener has no address").port();
    drop(listener);
    format!("http://127.0.0.1:{}/posts", port)
}

// --- UI test doubles ---

#[derive(Default)]
pub struct Trigger {
    prevented: Mutex<u32>,
}

impl Trigger {
    pub fn prevented(&self) -> u32 {
        *self.prevented.lock().unwrap()
    }
}

impl SubmitTrigger for Trigger {
    fn prevent_default(&self) {
        *self.prevented.lock().unwrap() += 1;
    }
}

#[derive(Default, Clone)]
pub struct Status {
    writes: Arc<Mutex<Vec<String>>>,
}

impl Status {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl StatusText for Status {
    fn set_text(&self, text: &str) {
        self.writes.lock().unwrap().push(text.to_string());
    }
}

/// A field whose value can change between submissions.
#[derive(Default, Clone)]
pub struct Field {
    value: Arc<Mutex<String>>,
}

impl Field {
    pub fn new(value: &str) -> Self {
        let field = Self::default();
        field.set(value);
        field
    }

    pub fn set(&self, value: &str) {
        *self.value.lock().unwrap() = value.to_string();
    }
}

impl FieldValue for Field {
    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }
}
