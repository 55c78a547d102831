use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, info};

use crate::{
    audio::error::AudioError,
    config::Config,
    mood::{GeneratedMood, GeneratorError, MoodGenerator, MoodRequest},
};

const MAX_ERROR_BODY: usize = 200;
/// Full tracks run to several megabytes.
pub const MEDIA_TIMEOUT: Duration = Duration::from_secs(300);

pub struct ApiService {
    client: Client,
    generator_url: String,
    generator_token: Option<String>,
    generator_timeout: Duration,
}

impl ApiService {
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("moodyo/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            generator_url: config.generator_url.clone(),
            generator_token: config.generator_token.clone(),
            generator_timeout: config.generator_timeout,
        })
    }

    fn media_request(&self, url: &str) -> RequestBuilder {
        self.client.get(url).timeout(MEDIA_TIMEOUT)
    }

    fn generator_request(&self, request: &MoodRequest) -> RequestBuilder {
        let builder = self
            .client
            .post(&self.generator_url)
            .timeout(self.generator_timeout)
            .json(request);
        match &self.generator_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn fetch_media(&self, url: &str) -> Result<Vec<u8>, AudioError> {
        let response = self
            .media_request(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AudioError::NetworkError(e.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AudioError::NetworkError(e.to_string()))?;
        debug!("Fetched {} bytes from {url}", bytes.len());
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl MoodGenerator for ApiService {
    async fn generate(&self, request: &MoodRequest) -> Result<GeneratedMood, GeneratorError> {
        info!("Generating mood {:?}", request.name);

        let response = self
            .generator_request(request)
            .send()
            .await
            .map_err(request_error)?;
        let status = response.status();
        let body = response.text().await.map_err(request_error)?;

        if !status.is_success() {
            return Err(GeneratorError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        GeneratedMood::from_json(&body)
    }
}

fn request_error(e: reqwest::Error) -> GeneratorError {
    if e.is_timeout() {
        GeneratorError::Timeout
    } else {
        GeneratorError::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(timeout: Duration, token: Option<&str>) -> ApiService {
        let config = Config {
            generator_timeout: timeout,
            generator_token: token.map(str::to_string),
            ..Config::default()
        };
        ApiService::new(&config).unwrap()
    }

    fn mood_request() -> MoodRequest {
        MoodRequest {
            name: "Cosmic Jazz".to_string(),
            emoji: "🎷".to_string(),
            description: "Late night jazz".to_string(),
        }
    }

    #[test]
    fn generator_timeout_does_not_limit_media() {
        let api = service(Duration::from_secs(5), None);

        let generate = api.generator_request(&mood_request()).build().unwrap();
        assert_eq!(generate.timeout(), Some(&Duration::from_secs(5)));

        let media = api
            .media_request("https://media.test/track.mp3")
            .build()
            .unwrap();
        assert_eq!(media.timeout(), Some(&MEDIA_TIMEOUT));
    }

    #[test]
    fn generator_request_carries_token() {
        let api = service(Duration::from_secs(60), Some("s3cret"));
        let request = api.generator_request(&mood_request()).build().unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().as_str(), crate::config::DEFAULT_GENERATOR_URL);
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Bearer s3cret"
        );
    }
}
