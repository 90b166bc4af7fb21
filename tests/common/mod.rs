//! In-process stand-in for the OctoPrint endpoints the panel talks to.

#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use octo_panel::{
    config::printer_config::PrinterConfigOcto, conn_manager::conn_octoprint::OctoClientLocal,
};

pub const API_KEY: &str = "test-api-key";

pub struct MockInner {
    pub printer_hits: usize,
    pub job_hits: usize,
    pub printer_queries: Vec<HashMap<String, String>>,
    pub api_keys: Vec<Option<String>>,
    pub commands: Vec<Value>,
    pub fail_printer: bool,
    pub reject_commands: bool,
    pub printer_body: Value,
    pub job_body: Value,
}

impl Default for MockInner {
    fn default() -> Self {
        Self {
            printer_hits: 0,
            job_hits: 0,
            printer_queries: vec![],
            api_keys: vec![],
            commands: vec![],
            fail_printer: false,
            reject_commands: false,
            printer_body: printing_body(),
            job_body: job_body(),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockOcto(pub Arc<Mutex<MockInner>>);

impl MockOcto {
    pub fn with<T>(&self, f: impl FnOnce(&mut MockInner) -> T) -> T {
        f(&mut self.0.lock().unwrap())
    }
}

pub fn printing_body() -> Value {
    json!({
        "temperature": {
            "tool0": {"actual": 214.9, "target": 215.0, "offset": 0},
            "bed": {"actual": 60.1, "target": 60.0, "offset": 0}
        },
        "state": {
            "text": "Printing",
            "flags": {
                "operational": true,
                "paused": false,
                "printing": true,
                "cancelling": false,
                "pausing": false,
                "sdReady": false,
                "error": false,
                "ready": false,
                "closedOrError": false
            }
        }
    })
}

pub fn job_body() -> Value {
    json!({
        "job": {
            "file": {"name": "benchy.gcode", "origin": "local", "size": 2048, "date": 1700000000},
            "estimatedPrintTime": 3600.0,
            "lastPrintTime": null
        },
        "progress": {
            "completion": 40.0,
            "filepos": 819,
            "printTime": 1440,
            "printTimeLeft": 2160
        },
        "state": "Printing"
    })
}

fn api_key(headers: &HeaderMap) -> Option<String> {
    headers
        .get("X-Api-Key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn printer(
    State(mock): State<MockOcto>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    mock.with(|m| {
        m.printer_hits += 1;
        m.api_keys.push(api_key(&headers));
        m.printer_queries.push(query);
        if m.fail_printer {
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        } else {
            Json(m.printer_body.clone()).into_response()
        }
    })
}

async fn job(State(mock): State<MockOcto>, headers: HeaderMap) -> Response {
    mock.with(|m| {
        m.job_hits += 1;
        m.api_keys.push(api_key(&headers));
        Json(m.job_body.clone()).into_response()
    })
}

async fn job_command(
    State(mock): State<MockOcto>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    mock.with(|m| {
        m.api_keys.push(api_key(&headers));
        m.commands.push(body);
        if m.reject_commands {
            StatusCode::CONFLICT
        } else {
            StatusCode::NO_CONTENT
        }
    })
}

pub async fn spawn_mock(mock: MockOcto) -> SocketAddr {
    let app = Router::new()
        .route("/api/printer", get(printer))
        .route("/api/job", get(job).post(job_command))
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn client_for(addr: SocketAddr) -> OctoClientLocal {
    let cfg = PrinterConfigOcto::new(addr.ip().to_string(), addr.port(), API_KEY.to_string());
    OctoClientLocal::new(&cfg, Some(std::time::Duration::from_secs(5))).unwrap()
}
