use std::path::Path;
use std::process::Command;

use log::info;

use super::models::{ClassifierError, Prediction};
use super::LeafClassifier;

/// Bridges to the externally supplied model by running a configured command
/// with the image path appended, expecting a `{"category", "confidence"}`
/// JSON object on stdout.
pub struct ScriptClassifier {
    program: String,
    args: Vec<String>,
}

impl ScriptClassifier {
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(String::from);
        let program = parts.next().unwrap_or_else(|| "python3".to_string());
        Self {
            program,
            args: parts.collect(),
        }
    }
}

impl LeafClassifier for ScriptClassifier {
    fn classify(&self, image_path: &Path) -> Result<Prediction, ClassifierError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(image_path)
            .output()?;

        if !output.status.success() {
            return Err(ClassifierError::Failed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let prediction: Prediction = serde_json::from_slice(&output.stdout)?;
        info!(
            "Classifier predicted '{}' with confidence {:.3}",
            prediction.category, prediction.confidence
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn script_classifier(dir: &TempDir, script: &str) -> ScriptClassifier {
        let script_path = dir.path().join("predict.sh");
        fs::write(&script_path, script).unwrap();
        ScriptClassifier::new(&format!("sh {}", script_path.display()))
    }

    #[test]
    fn parses_prediction_from_stdout() {
        let dir = TempDir::new().unwrap();
        let classifier = script_classifier(
            &dir,
            r#"echo '{"category":"Tomato___Early_blight","confidence":0.92}'"#,
        );

        let prediction = classifier.classify(Path::new("leaf.jpg")).unwrap();
        assert_eq!(prediction.category, "Tomato___Early_blight");
        assert_eq!(prediction.confidence, 0.92);
    }

    #[test]
    fn nonzero_exit_reports_status_and_stderr() {
        let dir = TempDir::new().unwrap();
        let classifier = script_classifier(&dir, "echo 'model exploded' >&2; exit 3");

        let err = classifier.classify(Path::new("leaf.jpg")).unwrap_err();
        match err {
            ClassifierError::Failed { status, stderr } => {
                assert_eq!(status, 3);
                assert!(stderr.contains("model exploded"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn garbage_stdout_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let classifier = script_classifier(&dir, "echo not-a-prediction");

        let err = classifier.classify(Path::new("leaf.jpg")).unwrap_err();
        assert!(matches!(err, ClassifierError::Parse(_)));
    }
}
