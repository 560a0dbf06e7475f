// SPDX-License-Identifier: MPL-2.0
//! HTTP layer: routing, shared state, and the page handler.
//!
//! `GET /` serves the default locale, `GET /:locale` any configured locale.
//! A failed CMS fetch is logged and answered with a bare 500 — the page keeps
//! the upstream's let-it-fail behavior instead of inventing fallback content.

use crate::cms::CmsClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::page;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unic_langid::LanguageIdentifier;

pub struct AppState {
    pub cms: CmsClient,
    pub i18n: I18n,
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(default_locale_page))
        .route("/:locale", get(locale_page))
        .with_state(state)
}

/// Builds the shared state and serves until the listener fails.
pub async fn run(config: Config) -> Result<()> {
    let i18n = I18n::new(config.default_locale())?;
    let cms = CmsClient::new(&config)?;
    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .map_err(|_| Error::Config(format!("invalid listen address {:?}", config.listen_addr())))?;

    let locales: Vec<String> = i18n
        .available_locales()
        .iter()
        .map(|l| l.to_string())
        .collect();
    info!(%addr, ?locales, "listening");

    let router = build_router(Arc::new(AppState { cms, i18n }));
    axum::Server::bind(&addr)
        .serve(router.into_make_service())
        .await
        .map_err(|e| Error::Http(e.to_string()))?;
    Ok(())
}

async fn default_locale_page(State(state): State<Arc<AppState>>) -> Response {
    let locale = state.i18n.default_locale().clone();
    faq_page(&state, locale).await
}

async fn locale_page(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> Response {
    match state.i18n.resolve(&locale) {
        Some(locale) => {
            let locale = locale.clone();
            faq_page(&state, locale).await
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn faq_page(state: &AppState, locale: LanguageIdentifier) -> Response {
    match state.cms.fetch_faqs(&locale).await {
        Ok(faqs) => {
            info!(locale = %locale, entries = faqs.len(), "serving FAQ page");
            Html(page::render_page(&state.i18n, &locale, &faqs)).into_response()
        }
        Err(err) => {
            error!(locale = %locale, error = %err, "FAQ fetch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
