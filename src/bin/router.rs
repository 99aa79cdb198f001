use aws_config::BehaviorVersion;
use aws_lambda_events::event::s3::S3Event;
use facegate::core::config::RouterConfig;
use facegate::router::{self, RouterState};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    facegate::setup_logging();
    let config = RouterConfig::from_env()?;
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let state = RouterState::new(config, &sdk_config);
    run(service_fn(|event: LambdaEvent<S3Event>| {
        router::handler(event, &state)
    }))
    .await
}
