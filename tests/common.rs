#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, http::StatusCode, web};
use chrono::Utc;
use serde_json::{Map, Value, json};
use uuid::Uuid;

use corpsite::services::{BackendClient, Upload};

const SINGLETONS: [&str; 4] = [
    "/api/overview/message",
    "/api/overview/vision-mission",
    "/api/contact/info",
    "/api/email-config",
];

const COLLECTIONS: [&str; 10] = [
    "/api/overview/banner",
    "/api/overview/milestones",
    "/api/overview/core-values",
    "/api/careers/jobs",
    "/api/candidates",
    "/api/automation/items",
    "/api/facilities/features",
    "/api/machinery/stages",
    "/api/products",
    "/api/contact/submissions",
];

/// One request as the fake backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub content_type: String,
    pub json: Option<Value>,
    /// Multipart text parts.
    pub fields: Vec<(String, String)>,
    /// Multipart file parts as `(field, file name, bytes)`.
    pub files: Vec<(String, String, Vec<u8>)>,
}

impl Recorded {
    pub fn is_multipart(&self) -> bool {
        self.content_type.starts_with("multipart/form-data")
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn file(&self, name: &str) -> Option<&(String, String, Vec<u8>)> {
        self.files.iter().find(|(k, _, _)| k == name)
    }

    /// The record the request carried, whatever its encoding.
    fn payload(&self) -> Map<String, Value> {
        if let Some(Value::Object(map)) = &self.json {
            return map.clone();
        }

        let mut map = Map::new();
        for (name, text) in &self.fields {
            map.insert(name.clone(), coerce(text));
        }
        for (name, file_name, _) in &self.files {
            let url = format!("/uploads/{file_name}");
            let value = match map.get(name) {
                Some(Value::Object(_)) => json!({ "url": url, "filename": file_name }),
                _ => Value::String(url),
            };
            map.insert(name.clone(), value);
        }
        map
    }
}

/// Multipart text is untyped; the backend coerces it like a form parser would.
fn coerce(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(value @ (Value::Number(_) | Value::Bool(_) | Value::Array(_) | Value::Object(_))) => value,
        _ => Value::String(text.to_string()),
    }
}

#[derive(Debug, Clone)]
pub enum Failure {
    /// `success: false` with this message.
    Backend(String),
    /// Bare status code with a non-JSON body.
    Status(u16),
    /// 200 with a body that is not an envelope.
    Garbage,
}

#[derive(Default)]
pub struct Store {
    collections: HashMap<String, Vec<Value>>,
    documents: HashMap<String, Value>,
    requests: Vec<Recorded>,
    failure: Option<(Failure, bool)>,
    /// Writes let through before a writes-only failure kicks in.
    passing_writes: usize,
}

/// An in-process stand-in for the content backend.
#[derive(Clone)]
pub struct FakeBackend {
    pub base_url: String,
    store: Arc<Mutex<Store>>,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let store = Arc::new(Mutex::new(Store::default()));
        let data = web::Data::from(store.clone());

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .app_data(web::PayloadConfig::new(32 * 1024 * 1024))
                .default_service(web::to(handle))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind fake backend");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            base_url: format!("http://{addr}"),
            store,
        }
    }

    pub fn client(&self) -> BackendClient {
        BackendClient::with_base_url(&self.base_url).expect("valid fake backend url")
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().expect("fake backend store")
    }

    /// Seeds a collection; items without `_id` get one.
    pub fn seed(&self, endpoint: &str, items: Vec<Value>) {
        let items = items
            .into_iter()
            .map(|mut item| {
                if item.get("_id").is_none() {
                    item["_id"] = json!(Uuid::new_v4().to_string());
                }
                item
            })
            .collect();
        self.lock().collections.insert(endpoint.to_string(), items);
    }

    pub fn seed_document(&self, endpoint: &str, document: Value) {
        self.lock().documents.insert(endpoint.to_string(), document);
    }

    pub fn items(&self, endpoint: &str) -> Vec<Value> {
        self.lock().collections.get(endpoint).cloned().unwrap_or_default()
    }

    pub fn document(&self, endpoint: &str) -> Option<Value> {
        self.lock().documents.get(endpoint).cloned()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.lock().requests.clone()
    }

    pub fn requests_with(&self, method: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    pub fn clear_requests(&self) {
        self.lock().requests.clear();
    }

    pub fn fail(&self, failure: Failure) {
        self.lock().failure = Some((failure, false));
    }

    /// Reads keep working; POST, PUT and DELETE fail.
    pub fn fail_writes(&self, failure: Failure) {
        self.fail_writes_after(0, failure);
    }

    /// Like `fail_writes`, but the first `passing` writes still succeed.
    pub fn fail_writes_after(&self, passing: usize, failure: Failure) {
        let mut store = self.lock();
        store.failure = Some((failure, true));
        store.passing_writes = passing;
    }

    pub fn recover(&self) {
        let mut store = self.lock();
        store.failure = None;
        store.passing_writes = 0;
    }
}

pub fn sample_upload(name: &str) -> Upload {
    Upload::new(name, "image/png", vec![0x89, b'P', b'N', b'G', 1, 2, 3])
}

async fn handle(req: HttpRequest, body: web::Bytes, store: web::Data<Mutex<Store>>) -> HttpResponse {
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let recorded = record(req.method().as_str(), req.path(), &content_type, &body);

    let mut store = store.lock().expect("fake backend store");
    store.requests.push(recorded.clone());

    if let Some((failure, writes_only)) = store.failure.clone() {
        if !writes_only {
            return failure_response(&failure);
        }
        if recorded.method != "GET" {
            if store.passing_writes == 0 {
                return failure_response(&failure);
            }
            store.passing_writes -= 1;
        }
    }

    let path = recorded.path.as_str();
    if SINGLETONS.contains(&path) {
        return match recorded.method.as_str() {
            "GET" => envelope(store.documents.get(path).cloned().unwrap_or(Value::Null)),
            "PUT" => {
                let mut document = match store.documents.get(path) {
                    Some(Value::Object(map)) => map.clone(),
                    _ => Map::new(),
                };
                document.extend(recorded.payload());
                let document = Value::Object(document);
                store.documents.insert(path.to_string(), document.clone());
                envelope(document)
            }
            _ => HttpResponse::MethodNotAllowed().finish(),
        };
    }

    let (root, id) = if COLLECTIONS.contains(&path) || store.collections.contains_key(path) {
        (path.to_string(), None)
    } else {
        match path.rsplit_once('/') {
            Some((root, id)) => (root.to_string(), Some(id.to_string())),
            None => return not_found(),
        }
    };
    let items = store.collections.entry(root).or_default();

    match (recorded.method.as_str(), id) {
        ("GET", None) => envelope(Value::Array(items.clone())),
        ("GET", Some(id)) => match items.iter().find(|item| item["_id"] == id.as_str()) {
            Some(item) => envelope(item.clone()),
            None => not_found(),
        },
        ("POST", None) => {
            let mut item = recorded.payload();
            item.insert("_id".to_string(), json!(Uuid::new_v4().to_string()));
            item.insert("createdAt".to_string(), json!(Utc::now().to_rfc3339()));
            let item = Value::Object(item);
            items.push(item.clone());
            envelope(item)
        }
        ("PUT", Some(id)) => match items.iter_mut().find(|item| item["_id"] == id.as_str()) {
            Some(item) => {
                if let Value::Object(map) = item {
                    map.extend(recorded.payload());
                    map.insert("_id".to_string(), json!(id));
                    map.insert("updatedAt".to_string(), json!(Utc::now().to_rfc3339()));
                }
                envelope(item.clone())
            }
            None => not_found(),
        },
        ("DELETE", Some(id)) => {
            let before = items.len();
            items.retain(|item| item["_id"] != id.as_str());
            if items.len() == before {
                not_found()
            } else {
                HttpResponse::Ok().json(json!({ "success": true, "message": "Deleted" }))
            }
        }
        _ => HttpResponse::MethodNotAllowed().finish(),
    }
}

fn envelope(data: Value) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "success": true, "data": data }))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "success": false, "message": "Không tìm thấy dữ liệu" }))
}

fn failure_response(failure: &Failure) -> HttpResponse {
    match failure {
        Failure::Backend(message) => {
            HttpResponse::BadRequest().json(json!({ "success": false, "message": message }))
        }
        Failure::Status(code) => HttpResponse::build(
            StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .content_type("text/html")
        .body("<html>upstream error</html>"),
        Failure::Garbage => HttpResponse::Ok().content_type("text/plain").body("not an envelope"),
    }
}

fn record(method: &str, path: &str, content_type: &str, body: &[u8]) -> Recorded {
    let mut recorded = Recorded {
        method: method.to_string(),
        path: path.to_string(),
        content_type: content_type.to_string(),
        json: None,
        fields: Vec::new(),
        files: Vec::new(),
    };

    if content_type.starts_with("application/json") {
        recorded.json = serde_json::from_slice(body).ok();
    } else if let Some(boundary) = content_type.split("boundary=").nth(1) {
        let boundary = boundary.trim_matches('"');
        for (name, file_name, data) in parse_multipart(body, boundary) {
            match file_name {
                Some(file_name) => recorded.files.push((name, file_name, data)),
                None => recorded
                    .fields
                    .push((name, String::from_utf8_lossy(&data).into_owned())),
            }
        }
    }

    recorded
}

/// Just enough multipart parsing for what reqwest produces.
fn parse_multipart(body: &[u8], boundary: &str) -> Vec<(String, Option<String>, Vec<u8>)> {
    let delimiter = format!("--{boundary}").into_bytes();
    let mut parts = Vec::new();

    for chunk in split_bytes(body, &delimiter).into_iter().skip(1) {
        if chunk.starts_with(b"--") {
            break;
        }
        let chunk = chunk.strip_prefix(b"\r\n").unwrap_or(chunk);
        let Some(split) = find(chunk, b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&chunk[..split]).into_owned();
        let mut data = chunk[split + 4..].to_vec();
        if data.ends_with(b"\r\n") {
            data.truncate(data.len() - 2);
        }

        let name = header_param(&headers, "name").unwrap_or_default();
        let file_name = header_param(&headers, "filename");
        parts.push((name, file_name, data));
    }

    parts
}

fn header_param(headers: &str, key: &str) -> Option<String> {
    let needle = format!("; {key}=\"");
    let start = headers.find(&needle)? + needle.len();
    let end = headers[start..].find('"')? + start;
    Some(headers[start..end].to_string())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn split_bytes<'a>(body: &'a [u8], delimiter: &[u8]) -> Vec<&'a [u8]> {
    let mut out = Vec::new();
    let mut rest = body;
    while let Some(at) = find(rest, delimiter) {
        out.push(&rest[..at]);
        rest = &rest[at + delimiter.len()..];
    }
    out.push(rest);
    out
}
