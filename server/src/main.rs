mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let gateway = services::gateway::ChainGateway::from_env().expect("chain gateway config");
    let wallet = services::wallet::WalletBridge::from_env().expect("wallet bridge config");

    let state = state::AppState::new(gateway, wallet);

    let app = routes::leptos_app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "crowdfund listening");
    axum::serve(listener, app).await.expect("server failed");
}
