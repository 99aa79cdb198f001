//! Door opener: fires the actuation webhook for recognized faces, at most
//! once per grace window.

use std::time::{SystemTime, UNIX_EPOCH};

use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::types::AttributeValue;
use lambda_runtime::{Error, LambdaEvent};
use tracing::info;

use crate::core::config::OpenerConfig;
use crate::core::models::{Command, RoutingResult};
use crate::errors::GateError;
use crate::webhook;

const LAST_OPEN_ITEM: &str = "last-open";

/// Clients and configuration built once at cold start and borrowed by every
/// invocation.
pub struct OpenerState {
    pub config: OpenerConfig,
    pub dynamo: DynamoClient,
    pub http: reqwest::Client,
}

impl OpenerState {
    pub fn new(
        config: OpenerConfig,
        sdk_config: &aws_config::SdkConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            config,
            dynamo: DynamoClient::new(sdk_config),
            http: webhook::client()?,
        })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Record an open attempt at `now`, but only if the previous one is older
/// than the grace window (or the marker item was never written). Returns
/// false when the window is still closed.
async fn grace_window_elapsed(
    dynamo: &DynamoClient,
    table: &str,
    grace_secs: u64,
) -> Result<bool, GateError> {
    let now = unix_now();
    let cutoff = now.saturating_sub(grace_secs);

    let outcome = dynamo
        .update_item()
        .table_name(table)
        .key("name", AttributeValue::S(LAST_OPEN_ITEM.to_string()))
        .update_expression("SET #TS = :ts")
        .condition_expression("attribute_not_exists(#TS) OR :cutoff > #TS")
        .expression_attribute_names("#TS", "timestamp")
        .expression_attribute_values(":ts", AttributeValue::N(now.to_string()))
        .expression_attribute_values(":cutoff", AttributeValue::N(cutoff.to_string()))
        .send()
        .await;

    match outcome {
        Ok(_) => Ok(true),
        Err(err) => {
            let err = err.into_service_error();
            if err.is_conditional_check_failed_exception() {
                Ok(false)
            } else {
                Err(GateError::RateTable(format!(
                    "Failed to update {}: {}",
                    LAST_OPEN_ITEM, err
                )))
            }
        }
    }
}

/// Lambda handler for the door opener. Only `open` events actuate the door;
/// anything else is an input error.
pub async fn handler(event: LambdaEvent<RoutingResult>, state: &OpenerState) -> Result<(), Error> {
    let result = event.payload;
    let config = &state.config;

    if result.command()? != Command::Open {
        return Err(GateError::InvalidEvent(format!(
            "command was not open: {}",
            result.command
        ))
        .into());
    }

    if !grace_window_elapsed(&state.dynamo, &config.table, config.grace_secs).await? {
        info!("Door opened within the last {}s, not firing", config.grace_secs);
        return Ok(());
    }

    info!("Opening the door for {}", result.username);
    webhook::post_json(&state.http, &config.webhook_url, &config.post_data).await?;
    Ok(())
}
