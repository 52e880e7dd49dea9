use crate::aggregator::LookupAggregator;
use crate::reply;
use crate::twiml;
use axum::{
    extract::{Form, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Shared application state injected into handlers.
pub struct AppState {
    pub aggregator: LookupAggregator,
}

/// Build the application router. Middleware layers are added in `main`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/whatsapp", post(whatsapp_reply))
        .with_state(state)
}

/// Liveness endpoint.
///
/// # Returns
///
/// * `&'static str` - HTTP 200 OK with a static plain-text status line.
pub async fn home() -> &'static str {
    "✅ WhatsApp bot is live! Use the /whatsapp endpoint via POST."
}

/// Inbound Twilio message form. Only the fields this service reads; Twilio
/// sends many more, all ignored.
#[derive(Debug, Default, Deserialize)]
pub struct IncomingMessage {
    #[serde(rename = "Body", default)]
    pub body: Option<String>,
    #[serde(rename = "From", default)]
    pub from: Option<String>,
}

/// POST /whatsapp
///
/// WhatsApp webhook entry point. Messages starting with `+` go through the
/// lookup pipeline; everything else gets the help text. Business failures
/// degrade to a text reply inside the TwiML envelope, never an HTTP error,
/// so the chat UX is preserved. Payloads the form extractor rejects (wrong
/// content type, undecodable body) degrade the same way instead of a 4xx.
pub async fn whatsapp_reply(
    State(state): State<Arc<AppState>>,
    message: Option<Form<IncomingMessage>>,
) -> impl IntoResponse {
    let message = message.map(|Form(m)| m).unwrap_or_default();
    let incoming = message.body.as_deref().unwrap_or("").trim();
    tracing::info!(
        from = ?message.from,
        "incoming WhatsApp message ({} chars)",
        incoming.len()
    );

    let text = if incoming.starts_with('+') {
        let outcome = state.aggregator.lookup_all(incoming).await;
        reply::render(&outcome)
    } else {
        reply::HELP_TEXT.to_string()
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, twiml::CONTENT_TYPE)],
        twiml::message_response(&text),
    )
}
