use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;

use crate::config::mail_config::MailConfig;
use crate::logger::init_logger;
use crate::services::chat_service::ChatService;
use crate::services::mail_service::MailService;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    // Configuración SMTP desde variables de entorno (EMAIL_USER / EMAIL_PASS)
    let mail_config = match MailConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => panic!("Configuración SMTP incompleta: {:?}", e),
    };

    // MailService
    let mail_service =
        MailService::new(mail_config).expect("No se pudo inicializar MailService");

    // ChatService (catálogo estático, sin estado)
    let chat_service = ChatService::new();

    // Levantar servidor
    log::info!("Levantando servidor en 0.0.0.0:5080");
    HttpServer::new(move || {
        App::new()
            // CORS permisivo, igual que los API routes originales
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Methods", "POST, OPTIONS"))
                    .add(("Access-Control-Allow-Headers", "Content-Type")),
            )
            .app_data(web::Data::new(mail_service.clone()))
            .app_data(web::Data::new(chat_service.clone()))
            .configure(app::init_app)
    })
    .workers(1)
    .bind(("0.0.0.0", 5080))?
    .run()
    .await
}
