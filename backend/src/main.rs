mod classifier;
mod config;
mod error;
mod llm;
mod routes;

use std::env;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use classifier::script_classifier::ScriptClassifier;
use classifier::LeafClassifier;
use config::LlmConfig;
use llm::disease_service::{DiseaseInfoProvider, DiseaseInfoService};
use routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    dotenv::dotenv().ok();

    let llm_config = LlmConfig::from_env();
    if llm_config.api_key.is_none() {
        log::warn!("GROQ_API_KEY is not set; /predict will fail until it is configured");
    }

    let classifier_command =
        env::var("CLASSIFIER_COMMAND").unwrap_or_else(|_| "python3 predict.py".to_string());
    log::info!("Classifier command: {}", classifier_command);

    let classifier: web::Data<dyn LeafClassifier> = web::Data::from(
        Arc::new(ScriptClassifier::new(&classifier_command)) as Arc<dyn LeafClassifier>,
    );
    let disease_info: web::Data<dyn DiseaseInfoProvider> = web::Data::from(Arc::new(
        DiseaseInfoService::new(reqwest::Client::new(), llm_config),
    )
        as Arc<dyn DiseaseInfoProvider>);

    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let bind_address = format!("0.0.0.0:{}", port);
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(classifier.clone())
            .app_data(disease_info.clone())
            .configure(configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
