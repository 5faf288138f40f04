use actix_web::{web, HttpRequest, HttpResponse, Responder};
use futures_util::StreamExt;

pub const GREETING: &str = "hello";

/// How much of a request body ends up in the log.
pub const LOGGED_BODY_LIMIT: usize = 4 * 1024;

/// Drains the whole body, keeping at most [`LOGGED_BODY_LIMIT`] bytes.
/// Returns the kept prefix and the total size seen. A broken stream just
/// ends the read.
async fn body_prefix(mut payload: web::Payload) -> (Vec<u8>, usize) {
    let mut prefix = Vec::new();
    let mut total = 0;

    while let Some(chunk) = payload.next().await {
        let Ok(chunk) = chunk else {
            break;
        };

        total += chunk.len();
        let room = LOGGED_BODY_LIMIT.saturating_sub(prefix.len());
        prefix.extend_from_slice(&chunk[..chunk.len().min(room)]);
    }

    (prefix, total)
}

/// Logs what came in and answers [`GREETING`], whatever the body size.
pub async fn hello(req: HttpRequest, payload: web::Payload) -> impl Responder {
    let (body, size) = body_prefix(payload).await;

    let headers = req
        .headers()
        .iter()
        .map(|(name, value)| format!("{name}: {}", String::from_utf8_lossy(value.as_bytes())))
        .collect::<Vec<_>>()
        .join(", ");

    log::info!(
        "{} {} body={:?} ({size} bytes) headers=[{}]",
        req.method(),
        req.path(),
        String::from_utf8_lossy(&body),
        headers
    );

    let response = HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GREETING);

    log::info!("{GREETING}");

    response
}

pub async fn default_handler(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body(format!("Cannot {} {}", req.method(), req.path()))
}

/// Routes for the echo server.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(hello))
            .route(web::head().to(hello))
            .route(web::post().to(hello))
            .default_service(web::route().to(default_handler)),
    )
    .default_service(web::route().to(default_handler));
}
