use lambda_runtime::{Error, LambdaEvent};
use tracing::{info, warn};

use super::{card, thumbnail};
use crate::core::config::NotifierConfig;
use crate::core::models::{Command, RoutingResult};
use crate::webhook;

/// Clients and configuration built once at cold start and borrowed by every
/// invocation.
pub struct NotifierState {
    pub config: NotifierConfig,
    pub s3: aws_sdk_s3::Client,
    pub http: reqwest::Client,
}

impl NotifierState {
    pub fn new(
        config: NotifierConfig,
        sdk_config: &aws_config::SdkConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            config,
            s3: aws_sdk_s3::Client::new(sdk_config),
            http: webhook::client()?,
        })
    }
}

/// Lambda handler for the notifier. Rejects unrecognized commands before any
/// outbound call, thumbnails the image (falling back to the original on any
/// resize failure), and delivers the Teams card.
pub async fn handler(
    event: LambdaEvent<RoutingResult>,
    state: &NotifierState,
) -> Result<(), Error> {
    let result = event.payload;
    let config = &state.config;
    let command = result.command()?;

    let thumb_key = thumbnail::thumbnail_key(&result.s3key);
    let image_key =
        match thumbnail::generate(&state.s3, &config.bucket, &result.s3key, &thumb_key).await {
            Ok(()) => thumb_key,
            Err(e) => {
                warn!("Error resizing {}, using original image: {}", result.s3key, e);
                result.s3key.clone()
            }
        };

    let message = match command {
        Command::Open => {
            info!("Sending welcome message for {}", result.username);
            card::welcome_card(&result.username, &config.bucket, &image_key)
        }
        Command::Unknown => {
            info!("Sending unknown-face message for {}", result.s3key);
            card::unknown_card(
                &config.bucket,
                &image_key,
                &result.s3key,
                &config.train_url,
            )
        }
    };

    webhook::post_json(&state.http, &config.teams_webhook_url, &message).await?;
    Ok(())
}
