//! services/chat_service.rs
//! Respuestas enlatadas por keywords, mismo catálogo que el sitio original.

use anyhow::{anyhow, Result};

use crate::models::chat_model::ChatMessage;

struct ServiceOffering {
    id: &'static str,
    title: &'static str,
    price: &'static str,
}

struct PricingPlan {
    id: &'static str,
    name: &'static str,
    price: &'static str,
    time: &'static str,
}

const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        id: "mvp",
        title: "MVP Development",
        price: "Starting from $999",
    },
    ServiceOffering {
        id: "webapps",
        title: "Web Applications",
        price: "Starting from $2999",
    },
    ServiceOffering {
        id: "itsolutions",
        title: "IT Solutions",
        price: "Custom pricing based on requirements",
    },
];

const PLANS: &[PricingPlan] = &[
    PricingPlan {
        id: "starter",
        name: "Starter",
        price: "$999",
        time: "1 week",
    },
    PricingPlan {
        id: "pro",
        name: "Pro",
        price: "$2999",
        time: "2 weeks",
    },
    PricingPlan {
        id: "enterprise",
        name: "Enterprise",
        price: "$4999",
        time: "4 weeks",
    },
];

#[derive(Debug, Clone)]
pub struct ChatService;

impl ChatService {
    pub fn new() -> Self {
        Self
    }

    /// Solo importa el último mensaje; el historial previo se ignora.
    pub fn generate_response(&self, messages: &[ChatMessage]) -> Result<String> {
        let last = messages
            .last()
            .ok_or_else(|| anyhow!("Empty message list"))?;
        let last = last.content.to_lowercase();

        if last.contains("services") || last.contains("what do you offer") {
            let listing = SERVICES
                .iter()
                .map(|s| format!("- {}: {}", s.title, s.price))
                .collect::<Vec<_>>()
                .join("\n");
            return Ok(format!(
                "We offer the following services:\n{}\nWhich service are you interested in?",
                listing
            ));
        }

        if last.contains("pricing") || last.contains("plans") {
            let listing = PLANS
                .iter()
                .map(|p| format!("- {}: {} ({})", p.name, p.price, p.time))
                .collect::<Vec<_>>()
                .join("\n");
            return Ok(format!(
                "We have the following plans:\n{}\nWhich plan would you like more information about?",
                listing
            ));
        }

        for service in SERVICES {
            if last.contains(service.id) || last.contains(&service.title.to_lowercase()) {
                return Ok(format!(
                    "Great! You're interested in our {} service. To provide you with more \
                     detailed information and discuss your specific requirements, please use \
                     the \"Get Started\" button to open a request form.",
                    service.title
                ));
            }
        }

        for plan in PLANS {
            if last.contains(plan.id) || last.contains(&plan.name.to_lowercase()) {
                return Ok(format!(
                    "Excellent choice! You're interested in our {} plan. To give you more \
                     specific details and discuss your needs, please use the \"Get Started\" \
                     button to open a request form.",
                    plan.name
                ));
            }
        }

        Ok("I'm here to help you with information about our services and pricing plans. \
            What would you like to know more about? If you're ready to discuss your \
            specific needs, please use the 'Get Started' button to open a request form."
            .to_string())
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new()
    }
}
