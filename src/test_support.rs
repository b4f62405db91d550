use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use axum::{
    body::Bytes,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use diesel::{
    r2d2::{ConnectionManager, Pool},
    SqliteConnection,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::data::repositories::SqliteStore;

/// What the gateway last received
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

/// Canned chat-completions endpoint on an ephemeral local port
pub struct StubGateway {
    pub url: String,
    hits: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<CapturedRequest>>>,
}

impl StubGateway {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CapturedRequest> {
        self.last.lock().unwrap().clone()
    }
}

pub async fn spawn_gateway(status: StatusCode, body: String) -> StubGateway {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let last = Arc::new(Mutex::new(None));
    let recorder = last.clone();

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, request: Bytes| {
            let body = body.clone();
            let counter = counter.clone();
            let recorder = recorder.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                let authorization = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                let request = serde_json::from_slice(&request).unwrap_or(Value::Null);
                *recorder.lock().unwrap() = Some(CapturedRequest {
                    authorization,
                    body: request,
                });
                (status, body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubGateway {
        url: format!("http://{}/v1/chat/completions", addr),
        hits,
        last,
    }
}

pub fn chat_completion_body(content: &str) -> String {
    json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
    .to_string()
}

/// A single-connection in-memory database, optionally with tables created.
pub fn memory_store(with_tables: bool) -> SqliteStore {
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = Pool::builder().max_size(1).build(manager).unwrap();
    let store = SqliteStore::from_pool(pool);
    if with_tables {
        store.run_migrations().unwrap();
    }
    store
}

pub fn photosynthesis_materials() -> String {
    let flashcards: Vec<_> = (1..=8)
        .map(|i| json!({ "question": format!("Question {}", i), "answer": format!("Answer {}", i) }))
        .collect();
    let quiz: Vec<_> = (0..5)
        .map(|i| {
            json!({
                "question": format!("Quiz question {}", i + 1),
                "options": ["A) Sunlight", "B) Moonlight", "C) Soil", "D) Wind"],
                "correctIndex": i % 4,
                "explanation": "Plants capture light energy."
            })
        })
        .collect();

    json!({
        "explanation": "Plants use sunlight, water and air to make their own food.",
        "flashcards": flashcards,
        "quiz": quiz,
        "studyTips": ["Draw the cycle", "Teach a friend", "Use flashcards daily", "Quiz yourself"]
    })
    .to_string()
}
