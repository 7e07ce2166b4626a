/// Generative text service client
///
/// Prompts a hosted completion model for structured recommendation candidates.
/// Model output is untrusted text: chunks are concatenated and parsed strictly
/// into the expected JSON array shape, with no partial acceptance.
use crate::{
    error::{AppError, AppResult},
    models::{CandidateRecommendation, PreferenceProfile},
};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct PredictionRequest {
    input: PredictionInput,
}

#[derive(Debug, Serialize)]
struct PredictionInput {
    prompt: String,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    #[serde(default)]
    output: Vec<String>,
}

/// Trait for recommendation generation backends
///
/// Implemented by the real model client and by test stubs; the handler only
/// sees this seam.
#[async_trait::async_trait]
pub trait GenerationService: Send + Sync {
    /// Generate exactly `count` candidate recommendations for a profile.
    ///
    /// Fails with `UpstreamGeneration` when the model call itself fails and
    /// with `MalformedOutput` when the returned text does not parse into
    /// `count` well-shaped candidates.
    async fn generate(
        &self,
        profile: &PreferenceProfile,
        count: usize,
    ) -> AppResult<Vec<CandidateRecommendation>>;
}

/// Client for a Replicate-style prediction API
pub struct ReplicateClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
    temperature: f64,
}

impl ReplicateClient {
    pub fn new(
        api_key: String,
        api_url: String,
        model: String,
        temperature: f64,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
            model,
            temperature,
        })
    }
}

/// Builds the deterministic instruction prompt for one profile.
///
/// An empty inspiration field is rendered as "none provided" so the template
/// never embeds a blank slot.
pub fn build_prompt(profile: &PreferenceProfile, count: usize) -> String {
    let inspiration = if profile.inspiration.trim().is_empty() {
        "none provided"
    } else {
        profile.inspiration.as_str()
    };

    format!(
        "You are an expert game recommender. Your user wants {count} different game recommendations.\n\
         User's criteria:\n\
         - Desired Mood: \"{mood}\"\n\
         - Favorite Genre: \"{genre}\"\n\
         - A game they like for inspiration: \"{inspiration}\"\n\
         \n\
         Based on this, recommend {count} different games. Provide your answer ONLY as a valid JSON array of objects with no surrounding prose.\n\
         Example format: [{{\"title\": \"Game A\", \"summary\": \"...\", \"tips\": [\"...\"]}}, {{\"title\": \"Game B\", \"summary\": \"...\", \"tips\": [\"...\"]}}]",
        count = count,
        mood = profile.mood,
        genre = profile.genre,
        inspiration = inspiration,
    )
}

/// Strictly parses concatenated model output into exactly `count` candidates.
///
/// Leading/trailing whitespace is tolerated; anything else that deviates from
/// the expected array shape is a `MalformedOutput`.
pub fn parse_candidates(raw: &str, count: usize) -> AppResult<Vec<CandidateRecommendation>> {
    let candidates: Vec<CandidateRecommendation> =
        serde_json::from_str(raw.trim()).map_err(|e| {
            AppError::MalformedOutput(format!("Model output is not the expected JSON array: {}", e))
        })?;

    if candidates.len() != count {
        return Err(AppError::MalformedOutput(format!(
            "Expected {} candidates, model returned {}",
            count,
            candidates.len()
        )));
    }

    Ok(candidates)
}

#[async_trait::async_trait]
impl GenerationService for ReplicateClient {
    async fn generate(
        &self,
        profile: &PreferenceProfile,
        count: usize,
    ) -> AppResult<Vec<CandidateRecommendation>> {
        let url = format!("{}/v1/models/{}/predictions", self.api_url, self.model);

        let request = PredictionRequest {
            input: PredictionInput {
                prompt: build_prompt(profile, count),
                temperature: self.temperature,
            },
        };

        tracing::debug!(model = %self.model, count, "Requesting recommendation candidates");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Prefer", "wait")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::UpstreamGeneration(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamGeneration(format!(
                "Model endpoint returned status {}: {}",
                status, body
            )));
        }

        let prediction: PredictionResponse = response.json().await.map_err(|e| {
            AppError::UpstreamGeneration(format!("Unreadable prediction envelope: {}", e))
        })?;

        // Output arrives as text chunks; joined they must form one JSON literal.
        let raw_output = prediction.output.concat();
        let candidates = parse_candidates(&raw_output, count)?;

        tracing::info!(
            count = candidates.len(),
            model = %self.model,
            "Generated recommendation candidates"
        );

        Ok(candidates)
    }
}
