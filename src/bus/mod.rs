//! IoT message channel shared by the router and the rate limiter: resolve
//! the account's data endpoint, then publish routing results as JSON.

use aws_sdk_iotdataplane::primitives::Blob;
use tracing::info;

use crate::core::models::RoutingResult;
use crate::errors::GateError;

/// Fire-and-forget delivery.
pub const QOS_AT_MOST_ONCE: i32 = 0;
/// Delivery acknowledged by the broker.
pub const QOS_AT_LEAST_ONCE: i32 = 1;

/// Look up the account's IoT data endpoint (`iot:Data-ATS`) and return it as
/// an endpoint URL.
pub async fn data_endpoint(iot: &aws_sdk_iot::Client) -> Result<String, GateError> {
    let resp = iot
        .describe_endpoint()
        .endpoint_type("iot:Data-ATS")
        .send()
        .await
        .map_err(|e| GateError::Bus(format!("Failed to describe IoT endpoint: {}", e)))?;

    let address = resp
        .endpoint_address()
        .ok_or_else(|| GateError::Bus("IoT endpoint response had no address".to_string()))?;

    Ok(format!("https://{}", address))
}

/// Build a data-plane client pinned to a resolved endpoint.
pub fn data_client(
    sdk_config: &aws_config::SdkConfig,
    endpoint_url: &str,
) -> aws_sdk_iotdataplane::Client {
    let conf = aws_sdk_iotdataplane::config::Builder::from(sdk_config)
        .endpoint_url(endpoint_url)
        .build();
    aws_sdk_iotdataplane::Client::from_conf(conf)
}

/// Publish a routing result on `topic`. No acknowledgment is awaited beyond
/// what the requested QoS implies.
pub async fn publish(
    client: &aws_sdk_iotdataplane::Client,
    topic: &str,
    qos: i32,
    result: &RoutingResult,
) -> Result<(), GateError> {
    let payload = serde_json::to_vec(result)
        .map_err(|e| GateError::Bus(format!("Failed to serialize routing result: {}", e)))?;

    info!("Publishing {} event to topic {}", result.command, topic);
    client
        .publish()
        .topic(topic)
        .qos(qos)
        .payload(Blob::new(payload))
        .send()
        .await
        .map_err(|e| GateError::Bus(format!("Failed to publish to {}: {}", topic, e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_iot::operation::describe_endpoint::DescribeEndpointOutput;
    use aws_sdk_iotdataplane::operation::publish::PublishOutput;
    use aws_smithy_mocks::{mock, mock_client};

    #[tokio::test]
    async fn resolves_data_endpoint_to_url() {
        let rule = mock!(aws_sdk_iot::Client::describe_endpoint).then_output(|| {
            DescribeEndpointOutput::builder()
                .endpoint_address("abc123-ats.iot.us-east-1.amazonaws.com")
                .build()
        });
        let iot = mock_client!(aws_sdk_iot, [&rule]);

        let url = data_endpoint(&iot).await.unwrap();
        assert_eq!(url, "https://abc123-ats.iot.us-east-1.amazonaws.com");
    }

    #[tokio::test]
    async fn missing_endpoint_address_is_an_error() {
        let rule = mock!(aws_sdk_iot::Client::describe_endpoint)
            .then_output(|| DescribeEndpointOutput::builder().build());
        let iot = mock_client!(aws_sdk_iot, [&rule]);

        assert!(data_endpoint(&iot).await.is_err());
    }

    #[tokio::test]
    async fn publishes_serialized_result() {
        let rule = mock!(aws_sdk_iotdataplane::Client::publish)
            .then_output(|| PublishOutput::builder().build());
        let client = mock_client!(aws_sdk_iotdataplane, [&rule]);

        let result = RoutingResult::unknown("unknown/abc.jpg".to_string());
        publish(&client, "gate/routing", QOS_AT_MOST_ONCE, &result)
            .await
            .unwrap();
        assert_eq!(rule.num_calls(), 1);
    }
}
