//! app.rs
use crate::handlers::{chat_handler, contact_handler};
use actix_web::{http::Method, web, HttpResponse};

/// Respuesta vacía para los preflights CORS (OPTIONS).
async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/contact")
                    .route(
                        "",
                        web::post().to(contact_handler::send_contact_endpoint),
                    )
                    .route("", web::method(Method::OPTIONS).to(preflight)),
            )
            .service(
                web::scope("/chat")
                    .route("", web::post().to(chat_handler::chat_endpoint))
                    .route("", web::method(Method::OPTIONS).to(preflight)),
            ),
    );
}
