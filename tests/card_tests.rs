use facegate::notifier::card::{unknown_card, welcome_card};

#[test]
fn test_welcome_card_shape() {
    let card = welcome_card("alice", "gate-images", "detected/alice/abc_small.jpg");
    let json = serde_json::to_value(&card).unwrap();

    assert_eq!(json["@type"], "MessageCard");
    assert_eq!(json["@context"], "http://schema.org/extensions");
    assert_eq!(json["themeColor"], "ccc");
    assert_eq!(json["title"], "Welcome to the office alice");
    assert_eq!(
        json["text"],
        "![who](https://s3.amazonaws.com/gate-images/detected/alice/abc_small.jpg)"
    );
    // The welcome branch carries no action sections.
    assert!(json.get("sections").is_none());
}

#[test]
fn test_unknown_card_has_train_and_discard_actions() {
    let card = unknown_card(
        "gate-images",
        "unknown/abc_small.jpg",
        "unknown/abc.jpg",
        "https://example.com/train",
    );
    let json = serde_json::to_value(&card).unwrap();

    assert_eq!(json["title"], "I don't know who this is...");
    assert_eq!(json["summary"], "I don't know who this is...");
    assert_eq!(
        json["text"],
        "![who](https://s3.amazonaws.com/gate-images/unknown/abc_small.jpg)"
    );

    let actions = &json["sections"][0]["potentialAction"][0];
    assert_eq!(actions["@type"], "ActionCard");
    assert_eq!(actions["inputs"][0]["@type"], "TextInput");
    assert_eq!(actions["inputs"][0]["id"], "name");

    let submit = &actions["actions"][0];
    let discard = &actions["actions"][1];
    assert_eq!(submit["@type"], "HttpPOST");
    assert_eq!(submit["name"], "Submit");
    assert_eq!(submit["target"], "https://example.com/train");
    assert_eq!(discard["name"], "Discard");
    assert_eq!(discard["target"], "https://example.com/train");
    assert_eq!(
        submit["headers"][0]["Content-Type"],
        "application/json"
    );
}

#[test]
fn test_action_bodies_carry_object_key_not_thumbnail() {
    let card = unknown_card(
        "gate-images",
        "unknown/abc_small.jpg",
        "unknown/abc.jpg",
        "https://example.com/train",
    );
    let json = serde_json::to_value(&card).unwrap();
    let actions = &json["sections"][0]["potentialAction"][0]["actions"];

    let train: serde_json::Value =
        serde_json::from_str(actions[0]["body"].as_str().unwrap()).unwrap();
    assert_eq!(train["action"], "train");
    assert_eq!(train["key"], "unknown/abc.jpg");
    assert_eq!(train["name"], "{{name.value}}");

    let discard: serde_json::Value =
        serde_json::from_str(actions[1]["body"].as_str().unwrap()).unwrap();
    assert_eq!(discard["action"], "discard");
    assert_eq!(discard["key"], "unknown/abc.jpg");
    assert!(discard.get("name").is_none());
}
