use aws_config::BehaviorVersion;
use facegate::core::config::NotifierConfig;
use facegate::core::models::RoutingResult;
use facegate::notifier::{self, NotifierState};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    facegate::setup_logging();
    let config = NotifierConfig::from_env()?;
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let state = NotifierState::new(config, &sdk_config)?;
    run(service_fn(|event: LambdaEvent<RoutingResult>| {
        notifier::handler(event, &state)
    }))
    .await
}
