use facegate::core::models::{Command, RoutingResult};
use facegate::errors::GateError;

#[test]
fn test_command_round_trip() {
    assert_eq!(Command::parse("open").unwrap(), Command::Open);
    assert_eq!(Command::parse("unknown").unwrap(), Command::Unknown);
    assert_eq!(Command::Open.as_str(), "open");
    assert_eq!(Command::Unknown.as_str(), "unknown");
}

#[test]
fn test_unrecognized_command_is_rejected() {
    let err = Command::parse("delete").unwrap_err();
    assert!(matches!(err, GateError::UnrecognizedCommand(ref c) if c == "delete"));
}

#[test]
fn test_routing_result_wire_shape() {
    let result = RoutingResult::open("alice", "detected/alice/abc.jpg".to_string());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "username": "alice",
            "command": "open",
            "s3key": "detected/alice/abc.jpg",
        })
    );
}

#[test]
fn test_routing_result_parses_from_bus_payload() {
    let payload = r#"{"username":"","command":"unknown","s3key":"unknown/abc.jpg"}"#;
    let result: RoutingResult = serde_json::from_str(payload).unwrap();

    assert_eq!(result.command().unwrap(), Command::Unknown);
    assert!(result.username.is_empty());
    assert_eq!(result.s3key, "unknown/abc.jpg");
}

#[test]
fn test_constructors_uphold_username_invariant() {
    let open = RoutingResult::open("alice", "k".to_string());
    let unknown = RoutingResult::unknown("k".to_string());

    assert!(!open.username.is_empty());
    assert_eq!(open.command().unwrap(), Command::Open);
    assert!(unknown.username.is_empty());
    assert_eq!(unknown.command().unwrap(), Command::Unknown);
}

#[test]
fn test_unrecognized_command_survives_deserialization_then_fails_parse() {
    // A routing result with a bogus command still deserializes (the wire
    // field is a plain string) so the consumer can name it in its error.
    let payload = r#"{"username":"","command":"delete","s3key":"unknown/abc.jpg"}"#;
    let result: RoutingResult = serde_json::from_str(payload).unwrap();

    assert!(result.command().is_err());
}
