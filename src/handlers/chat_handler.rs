//! handlers/chat_handler.rs
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::models::chat_model::{ChatRequest, ChatResponse};
use crate::services::chat_service::ChatService;

/// POST /api/chat
pub async fn chat_endpoint(
    chat_service: web::Data<ChatService>,
    body: web::Json<ChatRequest>,
) -> HttpResponse {
    let req_data = body.into_inner();

    match chat_service.generate_response(&req_data.messages) {
        Ok(message) => HttpResponse::Ok().json(ChatResponse { message }),
        Err(e) => {
            log::error!("Error in chat endpoint: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "message": "An error occurred while processing your request"
            }))
        }
    }
}
