use actix_web::{App, HttpServer};
use storefront::{config::EchoConfig, echo};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = EchoConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let server = HttpServer::new(|| {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .configure(echo::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .workers(config.workers)
    .run();

    log::info!("server is listening at {}", config.port);

    server.await
}
