use aws_lambda_events::event::s3::S3Event;
use aws_sdk_rekognition::types::{Image, S3Object};
use lambda_runtime::{Error, LambdaEvent};
use tracing::info;

use super::{decision, relocate};
use crate::bus;
use crate::core::config::RouterConfig;
use crate::errors::GateError;

/// Clients and configuration built once at cold start and borrowed by every
/// invocation.
pub struct RouterState {
    pub config: RouterConfig,
    pub s3: aws_sdk_s3::Client,
    pub rekognition: aws_sdk_rekognition::Client,
    pub iot: aws_sdk_iot::Client,
    pub sdk_config: aws_config::SdkConfig,
}

impl RouterState {
    pub fn new(config: RouterConfig, sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            config,
            s3: aws_sdk_s3::Client::new(sdk_config),
            rekognition: aws_sdk_rekognition::Client::new(sdk_config),
            iot: aws_sdk_iot::Client::new(sdk_config),
            sdk_config: sdk_config.clone(),
        }
    }
}

/// Lambda handler for the face router. Searches the Rekognition collection
/// for the uploaded face, relocates the object, and publishes the routing
/// result. Every failure aborts the invocation; retries belong to the
/// trigger.
pub async fn handler(event: LambdaEvent<S3Event>, state: &RouterState) -> Result<(), Error> {
    let key = event
        .payload
        .records
        .first()
        .and_then(|record| record.s3.object.key.clone())
        .ok_or_else(|| Error::from("No object key found in S3 event"))?;
    let config = &state.config;

    let resp = state
        .rekognition
        .search_faces_by_image()
        .collection_id(&config.collection_id)
        .image(
            Image::builder()
                .s3_object(
                    S3Object::builder()
                        .bucket(&config.bucket)
                        .name(&key)
                        .build(),
                )
                .build(),
        )
        .max_faces(decision::MAX_FACES)
        .face_match_threshold(decision::FACE_MATCH_THRESHOLD)
        .send()
        .await
        .map_err(|e| GateError::Recognition(format!("SearchFacesByImage failed: {}", e)))?;

    let matched_user = resp
        .face_matches()
        .first()
        .and_then(|m| m.face())
        .and_then(|face| face.external_image_id());

    let result = decision::classify(&key, matched_user);
    match matched_user {
        Some(user) => info!("Face matched {}, moving to {}", user, result.s3key),
        None => info!("No matches found, sending to unknown folder"),
    }

    relocate::move_object(&state.s3, &config.bucket, &key, &result.s3key).await?;

    let endpoint = bus::data_endpoint(&state.iot).await?;
    let data_client = bus::data_client(&state.sdk_config, &endpoint);
    bus::publish(
        &data_client,
        &config.iot_topic,
        bus::QOS_AT_MOST_ONCE,
        &result,
    )
    .await?;

    Ok(())
}
