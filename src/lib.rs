/// Facegate - a set of Lambda functions that turn a camera upload into a
/// door-entry workflow.
///
/// The pipeline is event-driven and stateless; each function is its own
/// Lambda binary:
/// 1. `facegate-router` reacts to an image landing in S3, searches a
///    Rekognition collection for the face, relocates the object under
///    `detected/<user>/` or `unknown/`, and publishes a routing result on
///    an IoT topic.
/// 2. `facegate-notifier` consumes the routing result, thumbnails the image
///    and posts a Teams MessageCard (a welcome, or an unknown-face card with
///    inline train/discard actions).
/// 3. `facegate-opener` fires the door-actuation webhook for recognized
///    faces, behind a DynamoDB grace window.
/// 4. `facegate-limiter` rate-limits routing results and republishes the
///    survivors on a second IoT topic.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - AWS IoT topics as the message channel between functions
/// - Rekognition for face matching, S3 for image storage
/// - DynamoDB conditional writes for the grace/rate windows
/// - Tokio for the async runtime
// Module declarations
pub mod bus;
pub mod core;
pub mod errors;
pub mod limiter;
pub mod notifier;
pub mod opener;
pub mod router;
pub mod webhook;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call it at the start of each Lambda `main`.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
