//! Local stand-in for the Paymob API: records every request and answers
//! with a canned status and body.

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: String,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    status: StatusCode,
    body: String,
}

pub struct MockGateway {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockGateway {
    /// Start a mock answering every request with `status` and a raw `body`.
    pub fn start(status: u16, body: impl Into<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let state = web::Data::new(MockState {
            requests: requests.clone(),
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .default_service(web::to(record))
        })
        .workers(1)
        .listen(listener)
        .unwrap()
        .run();
        actix_rt::spawn(server);

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Mock answering 200 with a JSON fixture.
    pub fn json(fixture: &serde_json::Value) -> Self {
        Self::start(200, fixture.to_string())
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

async fn record(req: HttpRequest, body: web::Bytes, state: web::Data<MockState>) -> HttpResponse {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    state.requests.lock().unwrap().push(Recorded {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        content_type: header("content-type"),
        authorization: header("authorization"),
        user_agent: header("user-agent"),
        body: body.to_vec(),
    });

    HttpResponse::build(state.status)
        .content_type("application/json")
        .body(state.body.clone())
}
