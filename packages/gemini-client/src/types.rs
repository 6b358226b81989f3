//! Gemini `generateContent` request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Request
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single-turn request with a user prompt.
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user(user_prompt)],
            system_instruction: None,
            generation_config: None,
        }
    }

    pub fn system(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(Content::instruction(instruction));
        self
    }

    pub fn config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    /// System instructions carry no role.
    pub fn instruction(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// `application/json` turns on JSON mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

impl GenerationConfig {
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn json(mut self) -> Self {
        self.response_mime_type = Some("application/json".to_string());
        self
    }
}

// =============================================================================
// Response
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl Candidate {
    /// First non-blank text part, trimmed.
    pub fn into_text(self) -> Option<String> {
        self.content.and_then(|content| {
            content
                .parts
                .unwrap_or_default()
                .into_iter()
                .find_map(|part| {
                    part.text
                        .map(|text| text.trim().to_string())
                        .filter(|value| !value.is_empty())
                })
        })
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate that has any.
    pub fn into_text(self) -> Option<String> {
        self.candidates
            .unwrap_or_default()
            .into_iter()
            .find_map(Candidate::into_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateContentRequest::new("Recommend sci-fi films")
            .system("Reply with JSON only")
            .config(GenerationConfig::default().temperature(0.8).json());

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Recommend sci-fi films");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Reply with JSON only");
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert!(body["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[test]
    fn response_text_skips_blank_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"   "}]},"finishReason":"SAFETY"},
                {"content":{"parts":[{"text":" [{\"title\":\"Dune\"}] "}]}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(response.into_text().as_deref(), Some(r#"[{"title":"Dune"}]"#));
    }

    #[test]
    fn response_without_candidates_has_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(response.into_text().is_none());
    }
}
