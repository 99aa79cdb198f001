use aws_config::BehaviorVersion;
use facegate::core::config::LimiterConfig;
use facegate::core::models::RoutingResult;
use facegate::limiter::{self, LimiterState};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    facegate::setup_logging();
    let config = LimiterConfig::from_env()?;
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let state = LimiterState::new(config, &sdk_config);
    run(service_fn(|event: LambdaEvent<RoutingResult>| {
        limiter::handler(event, &state)
    }))
    .await
}
