//! handlers/contact_handler.rs
use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::models::contact_model::ContactRequest;
use crate::services::mail_service::MailService;

/// POST /api/contact
pub async fn send_contact_endpoint(
    mail_service: web::Data<MailService>,
    body: web::Json<ContactRequest>,
) -> HttpResponse {
    let req_data = body.into_inner();

    // Mismos campos required que el formulario; rechazamos antes de
    // tocar el relay SMTP.
    if let Err(missing) = req_data.validate() {
        return HttpResponse::BadRequest().json(json!({
            "message": format!("Missing required fields: {}", missing.join(", "))
        }));
    }

    let submission_id = Uuid::new_v4().to_string();
    log::info!(
        "Solicitud de contacto {} de {} (plan: {})",
        submission_id,
        req_data.email,
        req_data.plan().unwrap_or("-")
    );

    match mail_service.send_contact_mail(&req_data).await {
        Ok(_) => {
            log::info!("Correo de contacto {} enviado", submission_id);
            HttpResponse::Ok().json(json!({
                "message": "Email sent successfully"
            }))
        }
        Err(e) => {
            log::error!("Fallo el correo de contacto {}: {:?}", submission_id, e);
            HttpResponse::InternalServerError().json(json!({
                "message": "Failed to send email",
                "error": e.to_string()
            }))
        }
    }
}
