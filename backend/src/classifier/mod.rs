pub mod models;
pub mod script_classifier;

use std::path::Path;

use models::{ClassifierError, Prediction};

/// The external leaf-disease model, consumed as an opaque function from an
/// image file path to a category label and confidence score.
pub trait LeafClassifier: Send + Sync {
    fn classify(&self, image_path: &Path) -> Result<Prediction, ClassifierError>;
}
