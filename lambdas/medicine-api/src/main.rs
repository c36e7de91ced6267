mod config;
mod routes;

use completion::GroqClient;
use config::Config;
use routes::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_env()?;

    let completion_client = GroqClient::new(config.groq_api_key.clone())
        .with_base_url(config.groq_base_url.clone())
        .with_model(config.groq_model.clone());

    tracing::info!("Using model {}", completion_client.model());

    let state = AppState {
        completion_client: Arc::new(completion_client),
    };

    let app = routes::router(state);

    // Running inside Lambda: hand the router to the Lambda runtime
    if std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        let app = tower::ServiceBuilder::new()
            .layer(axum_aws_lambda::LambdaLayer::default())
            .service(app);

        lambda_http::run(app).await?;
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
