//! Teams MessageCard payloads. The unknown-face card carries an ActionCard
//! with a name input and two HttpPOST actions that post back to the training
//! callback.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageCard {
    #[serde(rename = "@type")]
    pub card_type: String,
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
    pub summary: String,
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

#[derive(Debug, Serialize)]
pub struct Section {
    #[serde(rename = "potentialAction")]
    pub potential_action: Vec<ActionCard>,
}

#[derive(Debug, Serialize)]
pub struct ActionCard {
    #[serde(rename = "@type")]
    pub action_type: String,
    pub name: String,
    pub inputs: Vec<TextInput>,
    pub actions: Vec<HttpPostAction>,
}

#[derive(Debug, Serialize)]
pub struct TextInput {
    #[serde(rename = "@type")]
    pub input_type: String,
    pub id: String,
    pub placeholder: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct HttpPostAction {
    #[serde(rename = "@type")]
    pub action_type: String,
    pub name: String,
    pub target: String,
    pub body: String,
    pub headers: Vec<ActionHeader>,
}

#[derive(Debug, Serialize)]
pub struct ActionHeader {
    #[serde(rename = "Content-Type")]
    pub content_type: String,
}

fn image_markdown(bucket: &str, image_key: &str) -> String {
    format!("![who](https://s3.amazonaws.com/{}/{})", bucket, image_key)
}

fn json_headers() -> Vec<ActionHeader> {
    vec![ActionHeader {
        content_type: "application/json".to_string(),
    }]
}

/// Card posted when the face was recognized.
pub fn welcome_card(username: &str, bucket: &str, image_key: &str) -> MessageCard {
    MessageCard {
        card_type: "MessageCard".to_string(),
        context: "http://schema.org/extensions".to_string(),
        theme_color: "ccc".to_string(),
        summary: String::new(),
        title: format!("Welcome to the office {}", username),
        text: image_markdown(bucket, image_key),
        sections: Vec::new(),
    }
}

/// Card posted when the face was not recognized. `object_key` (the relocated
/// object, not the thumbnail) is what the train/discard actions hand back to
/// the training callback.
pub fn unknown_card(
    bucket: &str,
    image_key: &str,
    object_key: &str,
    train_url: &str,
) -> MessageCard {
    let train_body = serde_json::json!({
        "action": "train",
        "key": object_key,
        "name": "{{name.value}}",
    });
    let discard_body = serde_json::json!({
        "action": "discard",
        "key": object_key,
    });

    MessageCard {
        card_type: "MessageCard".to_string(),
        context: "http://schema.org/extensions".to_string(),
        theme_color: "ccc".to_string(),
        summary: "I don't know who this is...".to_string(),
        title: "I don't know who this is...".to_string(),
        text: image_markdown(bucket, image_key),
        sections: vec![Section {
            potential_action: vec![ActionCard {
                action_type: "ActionCard".to_string(),
                name: "who".to_string(),
                inputs: vec![TextInput {
                    input_type: "TextInput".to_string(),
                    id: "name".to_string(),
                    placeholder: "name".to_string(),
                    title: "whodisis".to_string(),
                }],
                actions: vec![
                    HttpPostAction {
                        action_type: "HttpPOST".to_string(),
                        name: "Submit".to_string(),
                        target: train_url.to_string(),
                        body: train_body.to_string(),
                        headers: json_headers(),
                    },
                    HttpPostAction {
                        action_type: "HttpPOST".to_string(),
                        name: "Discard".to_string(),
                        target: train_url.to_string(),
                        body: discard_body.to_string(),
                        headers: json_headers(),
                    },
                ],
            }],
        }],
    }
}
