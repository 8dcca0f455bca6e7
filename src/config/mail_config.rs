//! config/mail_config.rs
//! Configuración del relay SMTP, leída del entorno (.env o variables reales).

use anyhow::{Context, Result};

/// Configuración global de correo. `EMAIL_USER` funciona a la vez como
/// login del relay y como buzón From/To de las notificaciones de contacto.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
}

impl MailConfig {
    pub fn from_env() -> Result<Self> {
        let smtp_host =
            std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());

        // Puerto 465 = TLS implícito (igual que `secure: true` en el original)
        let smtp_port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(465);

        let smtp_user = std::env::var("EMAIL_USER").context("EMAIL_USER no está definido")?;
        let smtp_pass = std::env::var("EMAIL_PASS").context("EMAIL_PASS no está definido")?;

        Ok(MailConfig {
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_pass,
        })
    }
}
