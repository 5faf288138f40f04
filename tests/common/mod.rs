#![allow(dead_code)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::json;
use storefront::backend::model::{LoginRequest, RegisterRequest};
use uuid::Uuid;

/// An HTTP server on an ephemeral local port, stopped on [`TestServer::stop`].
pub struct TestServer {
    pub url: String,
    handle: ServerHandle,
}

impl TestServer {
    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

pub fn spawn<F>(configure: F) -> TestServer
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("couldn't bind test server");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();

    actix_web::rt::spawn(server);

    TestServer {
        url: format!("http://{addr}"),
        handle,
    }
}

/// A URL nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("couldn't bind probe");
    let addr = listener.local_addr().expect("probe has no address");
    drop(listener);

    format!("http://{addr}")
}

/// Answers every POST to `/login` and `/register` with the same status and
/// raw body, counting the requests it saw.
pub fn spawn_fixed(status: StatusCode, body: &'static str) -> (TestServer, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let server = spawn(move |cfg: &mut web::ServiceConfig| {
        let counter = counter.clone();
        let handler = move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async move {
                HttpResponse::build(status)
                    .content_type("application/json")
                    .body(body)
            }
        };

        cfg.route("/login", web::post().to(handler.clone()))
            .route("/register", web::post().to(handler));
    });

    (server, hits)
}

struct StoredUser {
    user_id: String,
    password_hash: String,
    role: String,
}

type Users = Mutex<HashMap<String, StoredUser>>;

async fn stub_register(users: web::Data<Users>, form: web::Json<RegisterRequest>) -> HttpResponse {
    let mut users = users.lock().expect("users lock poisoned");

    if users.contains_key(&form.username) {
        return HttpResponse::BadRequest().json(json!({"message": "Username already exists"}));
    }

    let password_hash = bcrypt::hash(&form.password, 4).expect("couldn't hash password");
    users.insert(
        form.username.clone(),
        StoredUser {
            user_id: Uuid::new_v4().to_string(),
            password_hash,
            role: form.role.clone(),
        },
    );

    HttpResponse::Ok().json(json!({"message": "Registration successful"}))
}

async fn stub_login(users: web::Data<Users>, form: web::Json<LoginRequest>) -> HttpResponse {
    let users = users.lock().expect("users lock poisoned");

    match users.get(&form.username) {
        Some(user) if bcrypt::verify(&form.password, &user.password_hash).unwrap_or(false) => {
            HttpResponse::Ok().json(json!({
                "user": {
                    "user_id": user.user_id,
                    "username": form.username,
                    "role": user.role,
                },
                "message": "Login successful",
            }))
        }
        _ => HttpResponse::Unauthorized().json(json!({"message": "Invalid username or password"})),
    }
}

/// In-memory stand-in for the grocery store account backend.
pub fn spawn_grocery_backend() -> TestServer {
    let users = web::Data::new(Users::default());

    spawn(move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(users.clone())
            .route("/register", web::post().to(stub_register))
            .route("/login", web::post().to(stub_login));
    })
}
