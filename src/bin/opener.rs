use aws_config::BehaviorVersion;
use facegate::core::config::OpenerConfig;
use facegate::core::models::RoutingResult;
use facegate::opener::{self, OpenerState};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    facegate::setup_logging();
    let config = OpenerConfig::from_env()?;
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let state = OpenerState::new(config, &sdk_config)?;
    run(service_fn(|event: LambdaEvent<RoutingResult>| {
        opener::handler(event, &state)
    }))
    .await
}
