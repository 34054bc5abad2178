//! In-process stand-in for the SportHub API.
//!
//! The server runs on its own thread with its own actix system, so tests can
//! drive the client from any runtime. Responses are canned per
//! `(method, path)`; unknown routes answer 404 with a FastAPI-style body.
//! Every request is recorded for later assertions.

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex, mpsc};
use std::thread::JoinHandle;

use actix_web::dev::ServerHandle;
use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};
use url::Url;

/// One request as the fake API saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

#[derive(Debug, Clone)]
struct Canned {
    status: u16,
    body: Option<Value>,
}

#[derive(Debug, Default)]
struct FakeState {
    routes: HashMap<(String, String), Canned>,
    requests: Vec<RecordedRequest>,
}

type SharedState = Arc<Mutex<FakeState>>;

pub struct FakeApi {
    base_url: Url,
    handle: ServerHandle,
    thread: Option<JoinHandle<()>>,
    state: SharedState,
}

impl FakeApi {
    pub fn start() -> Self {
        let state = SharedState::default();
        let server_state = Arc::clone(&state);
        let (ready_tx, ready_rx) = mpsc::channel();

        let thread = std::thread::spawn(move || {
            actix_web::rt::System::new().block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake api");
                let addr = listener.local_addr().expect("fake api address");
                let data = web::Data::new(server_state);
                let server = HttpServer::new(move || {
                    App::new()
                        .app_data(data.clone())
                        .default_service(web::to(respond))
                })
                .disable_signals()
                .workers(1)
                .listen(listener)
                .expect("fake api should listen")
                .run();
                ready_tx
                    .send((addr, server.handle()))
                    .expect("report fake api address");
                server.await.expect("fake api server");
            });
        });

        let (addr, handle) = ready_rx.recv().expect("fake api should start");
        let base_url = Url::parse(&format!("http://{addr}/")).expect("fake api url");
        Self {
            base_url,
            handle,
            thread: Some(thread),
            state,
        }
    }

    pub fn base_url(&self) -> Url {
        self.base_url.clone()
    }

    /// Answer `method path` with `status` and a JSON body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.install(method, path, status, Some(body));
    }

    /// Answer `method path` with `status` and no body.
    pub fn respond_empty(&self, method: &str, path: &str, status: u16) {
        self.install(method, path, status, None);
    }

    fn install(&self, method: &str, path: &str, status: u16, body: Option<Value>) {
        self.state
            .lock()
            .expect("fake api state")
            .routes
            .insert((method.to_owned(), path.to_owned()), Canned { status, body });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().expect("fake api state").requests.clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == method && request.path == path)
            .collect()
    }

    pub fn clear_requests(&self) {
        self.state.lock().expect("fake api state").requests.clear();
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        futures::executor::block_on(self.handle.stop(false));
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

async fn respond(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<SharedState>,
) -> HttpResponse {
    let method = req.method().as_str().to_owned();
    let path = req.path().to_owned();
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let mut state = state.lock().expect("fake api state");
    state.requests.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        authorization,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    match state.routes.get(&(method, path)) {
        Some(canned) => {
            let status = StatusCode::from_u16(canned.status).expect("canned status");
            match &canned.body {
                Some(body) => HttpResponse::build(status).json(body),
                None => HttpResponse::build(status).finish(),
            }
        }
        None => HttpResponse::NotFound().json(json!({ "detail": "Not Found" })),
    }
}
