use std::io::Write;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::{StreamExt, TryStreamExt};
use log::info;
use serde::Serialize;
use serde_json::json;
use tempfile::NamedTempFile;

use crate::classifier::LeafClassifier;
use crate::error::ApiError;
use crate::llm::disease_service::DiseaseInfoProvider;
use crate::llm::models::DiseaseInfo;

#[derive(Serialize)]
struct PredictionBody {
    class: String,
    confidence: f64,
}

#[derive(Serialize)]
struct PredictResponse {
    filename: String,
    image_type: String,
    prediction: PredictionBody,
    disease_information: DiseaseInfo,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(root)))
        .service(web::resource("/predict").route(web::post().to(predict)));
}

async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Plant Disease Prediction API. Use /predict endpoint with an image file."
    }))
}

async fn predict(
    mut payload: Multipart,
    classifier: web::Data<dyn LeafClassifier>,
    disease_info: web::Data<dyn DiseaseInfoProvider>,
) -> Result<HttpResponse, ApiError> {
    let mut filename = String::new();
    let mut image_data: Vec<u8> = Vec::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        if let Some(name) = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
        {
            filename = name.to_string();
        }
        while let Some(chunk) = field.next().await {
            let data = chunk?;
            image_data.write_all(&data)?;
        }
        if !image_data.is_empty() {
            break;
        }
    }

    if image_data.is_empty() {
        return Err(ApiError::InvalidImage);
    }

    // Unlinked when it drops, on every exit path below.
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(&image_data)?;

    let image_type = match image::guess_format(&image_data) {
        Ok(format) => format!("{:?}", format).to_lowercase(),
        Err(_) => {
            info!("Rejected upload '{}': not a recognized image", filename);
            return Err(ApiError::InvalidImage);
        }
    };

    let prediction = classifier.classify(temp_file.path())?;
    let information = disease_info.fetch(&prediction.category).await?;

    Ok(HttpResponse::Ok().json(PredictResponse {
        filename,
        image_type,
        prediction: PredictionBody {
            class: prediction.category,
            confidence: prediction.confidence,
        },
        disease_information: information,
    }))
}
