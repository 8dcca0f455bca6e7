//! tests/chat_tests.rs
//! Pruebas para `ChatService` y el endpoint /api/chat.

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use crate::config::mail_config::MailConfig;
    use crate::models::chat_model::ChatMessage;
    use crate::services::chat_service::ChatService;
    use crate::services::mail_service::MailService;

    fn msg(role: &str, content: &str) -> ChatMessage {
        ChatMessage {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    // Helper: MailService apuntando a un relay que nunca se toca en estos tests
    fn dummy_mail_service() -> MailService {
        MailService::new(MailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 2525,
            smtp_user: "test@example.com".to_string(),
            smtp_pass: "secret".to_string(),
        })
        .expect("Failed to build MailService")
    }

    #[actix_rt::test]
    async fn test_pricing_keyword_lists_plans() {
        let service = ChatService::new();
        let reply = service
            .generate_response(&[msg("user", "Tell me about pricing")])
            .unwrap();

        assert!(reply.starts_with("We have the following plans:"));
        assert!(reply.contains("- Starter: $999 (1 week)"));
        assert!(reply.contains("- Pro: $2999 (2 weeks)"));
        assert!(reply.contains("- Enterprise: $4999 (4 weeks)"));
    }

    #[actix_rt::test]
    async fn test_services_keyword_lists_offerings() {
        let service = ChatService::new();
        let reply = service
            .generate_response(&[msg("user", "What do you offer?")])
            .unwrap();

        assert!(reply.starts_with("We offer the following services:"));
        assert!(reply.contains("- MVP Development: Starting from $999"));
        assert!(reply.contains("- Web Applications: Starting from $2999"));
        assert!(reply.contains("- IT Solutions: Custom pricing based on requirements"));
    }

    #[actix_rt::test]
    async fn test_specific_plan_by_name() {
        let service = ChatService::new();
        let reply = service
            .generate_response(&[msg("user", "Tell me more about the Pro plan")])
            .unwrap();

        assert!(reply.contains("You're interested in our Pro plan"));
        assert!(reply.contains("\"Get Started\""));
    }

    #[actix_rt::test]
    async fn test_specific_service_by_id() {
        let service = ChatService::new();
        let reply = service
            .generate_response(&[msg("user", "I need an MVP for my startup")])
            .unwrap();

        assert!(reply.contains("You're interested in our MVP Development service"));
    }

    #[actix_rt::test]
    async fn test_fallback_response() {
        let service = ChatService::new();
        let reply = service.generate_response(&[msg("user", "hello there")]).unwrap();

        assert!(reply.contains("I'm here to help you"));
        assert!(reply.contains("'Get Started'"));
    }

    #[actix_rt::test]
    async fn test_matching_is_case_insensitive() {
        let service = ChatService::new();
        let reply = service
            .generate_response(&[msg("user", "PRICING please")])
            .unwrap();

        assert!(reply.starts_with("We have the following plans:"));
    }

    #[actix_rt::test]
    async fn test_only_last_message_considered() {
        let service = ChatService::new();
        let reply = service
            .generate_response(&[
                msg("user", "pricing"),
                msg("assistant", "We have the following plans..."),
                msg("user", "hm, not sure yet"),
            ])
            .unwrap();

        // El historial previo no influye: responde con el fallback
        assert!(reply.contains("I'm here to help you"));
    }

    #[actix_rt::test]
    async fn test_empty_messages_is_error() {
        let service = ChatService::new();
        assert!(service.generate_response(&[]).is_err());
    }

    #[actix_rt::test]
    async fn test_chat_endpoint_returns_plans() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ChatService::new()))
                .app_data(web::Data::new(dummy_mail_service()))
                .configure(crate::app::init_app),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(serde_json::json!({
                "messages": [{ "role": "user", "content": "what are your plans?" }]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        let message = body["message"].as_str().expect("message string");
        assert!(message.contains("- Starter: $999 (1 week)"));
    }

    #[actix_rt::test]
    async fn test_chat_endpoint_empty_messages_is_500() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ChatService::new()))
                .app_data(web::Data::new(dummy_mail_service()))
                .configure(crate::app::init_app),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(serde_json::json!({ "messages": [] }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "An error occurred while processing your request"
        );
    }
}
