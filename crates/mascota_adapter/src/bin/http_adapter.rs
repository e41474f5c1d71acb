#![forbid(unsafe_code)]

use std::{env, net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use mascota_adapter::{AdapterHealthResponse, SkillRuntime, SkillTurnRequest, SkillTurnResponse};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bind = env::var("MASCOTA_HTTP_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let addr: SocketAddr = bind.parse()?;

    let runtime = Arc::new(SkillRuntime::new());
    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/skill/turn", post(run_skill_turn))
        .with_state(runtime);

    println!("mascota_adapter_http listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthz() -> (StatusCode, Json<AdapterHealthResponse>) {
    (
        StatusCode::OK,
        Json(AdapterHealthResponse {
            status: "ok".to_string(),
        }),
    )
}

async fn run_skill_turn(
    State(runtime): State<Arc<SkillRuntime>>,
    Json(request): Json<SkillTurnRequest>,
) -> Json<SkillTurnResponse> {
    Json(runtime.run_turn(&request))
}
