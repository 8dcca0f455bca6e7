//! services/mail_service.rs

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{config::mail_config::MailConfig, models::contact_model::ContactRequest};

#[derive(Clone)]
pub struct MailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    mailbox: Mailbox,
}

impl MailService {
    pub fn new(config: MailConfig) -> Result<Self> {
        // From y To son el mismo buzón: la cuenta recibe sus propias
        // notificaciones de contacto.
        let mailbox: Mailbox = format!("Sollvr <{}>", config.smtp_user)
            .parse()
            .context("Invalid EMAIL_USER address")?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(config.smtp_user, config.smtp_pass))
            .build();

        Ok(Self { mailer, mailbox })
    }

    // ----------------------------------------------------------------
    // Enviar la notificación del formulario de contacto
    // ----------------------------------------------------------------
    pub async fn send_contact_mail(&self, req: &ContactRequest) -> Result<()> {
        let subject = contact_subject(req);
        let html = contact_body_html(req);

        let mut builder = Message::builder()
            .from(self.mailbox.clone())
            .to(self.mailbox.clone())
            .subject(subject);

        // Reply-To al remitente cuando su dirección parsea como mailbox
        if let Ok(reply_to) = req.email.trim().parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        let message = builder
            .header(ContentType::TEXT_HTML)
            .body(html)
            .context("Failed to build contact message")?;

        // Equivalente al transporter.verify() del original
        log::info!("Verificando conexión SMTP...");
        let reachable = self
            .mailer
            .test_connection()
            .await
            .context("SMTP connection check failed")?;
        if !reachable {
            return Err(anyhow!("SMTP relay rejected the connection"));
        }

        log::info!("Conexión verificada, enviando correo...");
        tokio::time::timeout(std::time::Duration::from_secs(30), self.mailer.send(message))
            .await
            .context("SMTP send timed out")?
            .context("SMTP send failed")?;

        Ok(())
    }
}

// ========================================================================
// Composición del correo (funciones puras, testeables sin relay)
// ========================================================================

pub fn contact_subject(req: &ContactRequest) -> String {
    match req.plan() {
        Some(plan) => format!("New Contact Form Submission - {} Plan", plan),
        None => "New Contact Form Submission".to_string(),
    }
}

pub fn contact_body_html(req: &ContactRequest) -> String {
    let mut html = String::new();

    match req.plan() {
        Some(plan) => html.push_str(&format!(
            "<h2>New Contact Form Submission - {} Plan</h2>\n",
            escape_html(plan)
        )),
        None => html.push_str("<h2>New Contact Form Submission</h2>\n"),
    }

    html.push_str(&format!(
        "<p><strong>Name:</strong> {}</p>\n",
        escape_html(&req.name)
    ));
    html.push_str(&format!(
        "<p><strong>Email:</strong> {}</p>\n",
        escape_html(&req.email)
    ));

    if let Some(company) = req.company() {
        html.push_str(&format!(
            "<p><strong>Company:</strong> {}</p>\n",
            escape_html(company)
        ));
    }
    if let Some(plan) = req.plan() {
        html.push_str(&format!(
            "<p><strong>Selected Plan:</strong> {}</p>\n",
            escape_html(plan)
        ));
    }

    html.push_str(&format!(
        "<p><strong>Message:</strong> {}</p>\n",
        escape_html(&req.message)
    ));
    html.push_str(&format!(
        "<p><strong>Received:</strong> {}</p>\n",
        Utc::now().to_rfc2822()
    ));

    html
}

/// El payload llega de un formulario público; escapamos antes de
/// interpolar en el HTML del correo.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
