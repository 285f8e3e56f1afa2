use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

/// What the fetcher hands back to the endpoint. The model is asked for JSON
/// but its output is untrusted; when the reply does not decode, the original
/// text is wrapped under `raw_content` so callers always get a valid payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiseaseInfo {
    Structured(Value),
    Raw { raw_content: String },
}

impl DiseaseInfo {
    pub fn from_reply(content: &str) -> Self {
        match serde_json::from_str::<Value>(content) {
            Ok(value) => DiseaseInfo::Structured(value),
            Err(_) => DiseaseInfo::Raw {
                raw_content: content.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_reply_decodes_verbatim() {
        let reply = r#"{"Description":"A fungal disease.","Symptoms":"Dark spots."}"#;
        let info = DiseaseInfo::from_reply(reply);
        assert_eq!(
            info,
            DiseaseInfo::Structured(json!({
                "Description": "A fungal disease.",
                "Symptoms": "Dark spots."
            }))
        );
    }

    #[test]
    fn prose_reply_falls_back_to_raw_content() {
        let reply = "Early blight is caused by Alternaria solani.";
        let info = DiseaseInfo::from_reply(reply);
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({ "raw_content": reply })
        );
    }

    #[test]
    fn structured_variant_serializes_as_the_decoded_value() {
        let info = DiseaseInfo::Structured(json!({"Treatment options": "Fungicide."}));
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({"Treatment options": "Fungicide."})
        );
    }
}
