//! Rate limiter: windows routing results per command (per username for
//! `open`, globally for `unknown`) and republishes the survivors at QoS 1.

use std::time::{SystemTime, UNIX_EPOCH};

use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::types::AttributeValue;
use lambda_runtime::{Error, LambdaEvent};
use tracing::{info, warn};

use crate::bus;
use crate::core::config::LimiterConfig;
use crate::core::models::{Command, RoutingResult};
use crate::errors::GateError;

/// Clients and configuration built once at cold start and borrowed by every
/// invocation.
pub struct LimiterState {
    pub config: LimiterConfig,
    pub dynamo: DynamoClient,
    pub iot: aws_sdk_iot::Client,
    pub sdk_config: aws_config::SdkConfig,
}

impl LimiterState {
    pub fn new(config: LimiterConfig, sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            config,
            dynamo: DynamoClient::new(sdk_config),
            iot: aws_sdk_iot::Client::new(sdk_config),
            sdk_config: sdk_config.clone(),
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Claim the `(name, selector)` window slot if the previous claim is older
/// than `rate_secs` (or was never made). Returns false when the window is
/// still closed.
async fn window_open(
    dynamo: &DynamoClient,
    table: &str,
    rate_secs: u64,
    name: &str,
    selector: &str,
) -> Result<bool, GateError> {
    let now = unix_now();
    let cutoff = now.saturating_sub(rate_secs);

    let outcome = dynamo
        .put_item()
        .table_name(table)
        .item("name", AttributeValue::S(name.to_string()))
        .item("selector", AttributeValue::S(selector.to_string()))
        .item("timestamp", AttributeValue::N(now.to_string()))
        .condition_expression("attribute_not_exists(#N) OR #TS < :cutoff")
        .expression_attribute_names("#N", "name")
        .expression_attribute_names("#TS", "timestamp")
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
                    "Failed to claim window {}/{}: {}",
                    name, selector, err
                )))
            }
        }
    }
}

/// Lambda handler for the rate limiter. Unrecognized commands are dropped
/// rather than surfaced; this function sits on a fan-out path and a poison
/// message must not wedge the trigger's retries.
pub async fn handler(event: LambdaEvent<RoutingResult>, state: &LimiterState) -> Result<(), Error> {
    let result = event.payload;
    let config = &state.config;

    let pass = match result.command() {
        Ok(Command::Open) => {
            window_open(
                &state.dynamo,
                &config.table,
                config.open_rate_secs,
                "open",
                &result.username,
            )
            .await?
        }
        Ok(Command::Unknown) => {
            window_open(
                &state.dynamo,
                &config.table,
                config.unknown_rate_secs,
                "unknown",
                "last",
            )
            .await?
        }
        Err(e) => {
            warn!("Dropping event: {}", e);
            false
        }
    };

    if !pass {
        info!("No {} event published, limited by rate", result.command);
        return Ok(());
    }

    let endpoint = bus::data_endpoint(&state.iot).await?;
    let data_client = bus::data_client(&state.sdk_config, &endpoint);
    bus::publish(
        &data_client,
        &config.iot_topic,
        bus::QOS_AT_LEAST_ONCE,
        &result,
    )
    .await?;

    Ok(())
}
