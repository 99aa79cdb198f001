use std::env;

/// Configuration for the face-routing Lambda.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub bucket: String,
    pub iot_topic: String,
    pub collection_id: String,
}

impl RouterConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            bucket: env::var("BUCKET_NAME").map_err(|e| format!("BUCKET_NAME: {}", e))?,
            iot_topic: env::var("IOT_TOPIC").map_err(|e| format!("IOT_TOPIC: {}", e))?,
            collection_id: env::var("REKOGNITION_COLLECTION_ID")
                .map_err(|e| format!("REKOGNITION_COLLECTION_ID: {}", e))?,
        })
    }
}

/// Configuration for the Teams-notification Lambda.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub bucket: String,
    pub teams_webhook_url: String,
    pub train_url: String,
}

impl NotifierConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            bucket: env::var("BUCKET_NAME").map_err(|e| format!("BUCKET_NAME: {}", e))?,
            teams_webhook_url: env::var("TEAMS_WEBHOOK")
                .map_err(|e| format!("TEAMS_WEBHOOK: {}", e))?,
            train_url: env::var("TRAIN_URL").map_err(|e| format!("TRAIN_URL: {}", e))?,
        })
    }
}

/// Configuration for the door-opening Lambda.
#[derive(Debug, Clone)]
pub struct OpenerConfig {
    pub webhook_url: String,
    pub grace_secs: u64,
    pub table: String,
    /// JSON payload POSTed to the door webhook; defaults to `{}`.
    pub post_data: serde_json::Value,
}

impl OpenerConfig {
    pub fn from_env() -> Result<Self, String> {
        let post_data = match env::var("WEBHOOK_POST_DATA") {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(|e| format!("WEBHOOK_POST_DATA: {}", e))?
            }
            Err(_) => serde_json::json!({}),
        };
        Ok(Self {
            webhook_url: env::var("WEBHOOK_URL").map_err(|e| format!("WEBHOOK_URL: {}", e))?,
            grace_secs: env::var("GRACE")
                .map_err(|e| format!("GRACE: {}", e))?
                .parse()
                .map_err(|e| format!("GRACE: {}", e))?,
            table: env::var("DYNAMODB_TABLE").map_err(|e| format!("DYNAMODB_TABLE: {}", e))?,
            post_data,
        })
    }
}

/// Configuration for the rate-limiting Lambda.
#[derive(Debug, Clone)]
pub struct LimiterConfig {
    pub table: String,
    pub iot_topic: String,
    pub open_rate_secs: u64,
    pub unknown_rate_secs: u64,
}

impl LimiterConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            table: env::var("DYNAMODB_TABLE").map_err(|e| format!("DYNAMODB_TABLE: {}", e))?,
            iot_topic: env::var("IOT_TOPIC").map_err(|e| format!("IOT_TOPIC: {}", e))?,
            open_rate_secs: env::var("OPEN_RATE")
                .map_err(|e| format!("OPEN_RATE: {}", e))?
                .parse()
                .map_err(|e| format!("OPEN_RATE: {}", e))?,
            unknown_rate_secs: env::var("UNKNOWN_RATE")
                .map_err(|e| format!("UNKNOWN_RATE: {}", e))?
                .parse()
                .map_err(|e| format!("UNKNOWN_RATE: {}", e))?,
        })
    }
}
