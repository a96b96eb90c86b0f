#![recursion_limit = "256"]

mod config;
mod content;
mod routes;
mod services;
mod site;
mod state;

use std::sync::Arc;

use crate::services::mailer::{Mailer, ResendMailer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let site = config::SiteConfig::from_env();

    // Contact relay is non-fatal: the site serves fine without the secrets,
    // /api/contact reports a configuration error until they are set.
    let contact = match config::ContactConfig::from_env() {
        Some(contact_config) => {
            tracing::info!(
                to = %contact_config.to_email,
                auto_reply = contact_config.auto_reply,
                "contact relay configured"
            );
            let mailer: Arc<dyn Mailer> = Arc::new(ResendMailer::new(&contact_config.api_key));
            Some(state::ContactRelay { config: Arc::new(contact_config), mailer })
        }
        None => {
            tracing::warn!("contact secrets missing; contact form disabled until configured");
            None
        }
    };

    let state = state::AppState::new(site, contact);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "folio listening");
    axum::serve(listener, app).await.expect("server failed");
}
