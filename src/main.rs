use std::sync::Arc;

use axum::routing::get;
use tower_http::cors::CorsLayer;

use careerbot_backend::config::Settings;
use careerbot_backend::routes;
use careerbot_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env();
    tracing::info!(
        backend = settings.backend_url.as_deref().unwrap_or("<none>"),
        model = %settings.openai_model,
        has_api_key = settings.openai_api_key.is_some(),
        "starting career counsellor backend"
    );

    let bind_addr = settings.bind_addr.clone();
    let state = Arc::new(AppState::new(settings));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router()
        .route("/", get(|| async { "Career counsellor API is running" }))
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("career counsellor backend running at http://{bind_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
