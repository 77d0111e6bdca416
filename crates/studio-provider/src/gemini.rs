//! Gemini-backed `ImageProvider` implementation
//!
//! Shapes the `generateContent` request body (inline-data parts for
//! references, text part for the rendered prompt, image config per model
//! tier) and extracts the first inline image part of the first candidate.

use crate::error::ProviderError;
use crate::request::{GenerationRequest, ImageProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use studio_model::ImageRef;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const ASPECT_RATIO: &str = "4:3";

/// Reqwest-backed Gemini image client
#[derive(Debug, Clone)]
pub struct GeminiImageClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiImageClient {
    /// Create a client against the production endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the endpoint (test servers)
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn build_body(req: &GenerationRequest) -> GenerateContentBody {
        let mut parts: Vec<Part> = req
            .references
            .iter()
            .map(|r| Part {
                inline_data: Some(InlineData {
                    mime_type: r.media_type().to_string(),
                    data: r.as_base64().to_string(),
                }),
                text: None,
            })
            .collect();

        parts.push(Part {
            inline_data: None,
            text: Some(req.final_prompt()),
        });

        GenerateContentBody {
            contents: Contents { parts },
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: ASPECT_RATIO.to_string(),
                    image_size: req.tier.image_size().map(str::to_string),
                },
            },
        }
    }

    fn extract_image(response: GenerateContentResponse) -> Result<ImageRef, ProviderError> {
        if let Some(error) = response.error {
            return Err(ProviderError::from_api_message(error.message));
        }

        let inline = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .find_map(|p| p.inline_data);

        match inline {
            Some(data) => Ok(ImageRef::new(
                if data.mime_type.is_empty() {
                    "image/png".to_string()
                } else {
                    data.mime_type
                },
                data.data,
            )),
            None => Err(ProviderError::NoImage),
        }
    }
}

#[async_trait]
impl ImageProvider for GeminiImageClient {
    async fn generate(&self, req: GenerationRequest) -> Result<ImageRef, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.endpoint,
            req.tier.model_id()
        );
        tracing::debug!(
            model = %req.tier,
            mode = ?req.mode(),
            references = req.references.len(),
            "dispatching generateContent"
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::build_body(&req))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::KeyInvalid);
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Self::extract_image(parsed)
    }
}

// Wire types. Field names follow the provider's camelCase JSON.

#[derive(Debug, Serialize)]
struct GenerateContentBody {
    contents: Contents,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Contents {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType", default)]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "imageConfig")]
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
struct ImageConfig {
    #[serde(rename = "aspectRatio")]
    aspect_ratio: String,
    #[serde(rename = "imageSize", skip_serializing_if = "Option::is_none")]
    image_size: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ModelTier;

    fn response_with_parts(parts: Vec<Part>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent { parts }),
            }],
            error: None,
        }
    }

    #[test]
    fn body_places_references_before_prompt() {
        let req = GenerationRequest::new("scene", ModelTier::Pro)
            .with_references(vec![ImageRef::from_bytes("image/png", b"anchor")]);
        let body = GeminiImageClient::build_body(&req);

        assert_eq!(body.contents.parts.len(), 2);
        assert!(body.contents.parts[0].inline_data.is_some());
        assert!(body.contents.parts[1].text.is_some());
        assert_eq!(
            body.generation_config.image_config.image_size.as_deref(),
            Some("2K")
        );
    }

    #[test]
    fn flash_tier_omits_image_size() {
        let req = GenerationRequest::new("scene", ModelTier::Flash);
        let body = GeminiImageClient::build_body(&req);
        assert!(body.generation_config.image_config.image_size.is_none());
        assert_eq!(body.generation_config.image_config.aspect_ratio, "4:3");
    }

    #[test]
    fn extracts_first_inline_image() {
        let response = response_with_parts(vec![
            Part {
                inline_data: None,
                text: Some("preface".into()),
            },
            Part {
                inline_data: Some(InlineData {
                    mime_type: "image/png".into(),
                    data: "aGVsbG8=".into(),
                }),
                text: None,
            },
        ]);

        let image = GeminiImageClient::extract_image(response).unwrap();
        assert_eq!(image.as_base64(), "aGVsbG8=");
        assert_eq!(image.media_type(), "image/png");
    }

    #[test]
    fn missing_image_part_is_no_image() {
        let response = response_with_parts(vec![Part {
            inline_data: None,
            text: Some("no image here".into()),
        }]);
        assert!(matches!(
            GeminiImageClient::extract_image(response),
            Err(ProviderError::NoImage)
        ));
    }

    #[test]
    fn api_error_message_is_classified() {
        let response = GenerateContentResponse {
            candidates: vec![],
            error: Some(ApiError {
                message: "Requested entity was not found.".into(),
            }),
        };
        assert!(matches!(
            GeminiImageClient::extract_image(response),
            Err(ProviderError::KeyInvalid)
        ));
    }
}
