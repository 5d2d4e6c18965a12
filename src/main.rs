mod application;
mod dto;
mod error;
mod qr_code;
mod repository;
mod routing;
mod service;
mod views;

use application::ApplicationEnv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let (state, state_to_close) = application::create_state(&env).await?;
    let middleware = application::create_middleware(&env);
    let app = application::create_application(state, middleware);

    tracing::info!("binding {}", env.bind_address);
    let listener = tokio::net::TcpListener::bind(env.bind_address).await?;

    tracing::info!("application started");
    axum::serve(listener, app)
        .with_graceful_shutdown(application::shutdown_signal())
        .await?;

    application::close(state_to_close).await;
    tracing::info!("application closed");

    Ok(())
}
