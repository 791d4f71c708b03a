#![cfg(feature = "serde")]

use ipv4_cidr::{Address, Network};

#[test]
fn should_serialize_as_text() {
    let addr = Address::new(192, 168, 0, 1);
    assert_eq!(serde_json::to_string(&addr).expect("to serialize"), "\"192.168.0.1\"");

    let network = Network::parse("192.168.0.1/24").expect("to parse");
    assert_eq!(serde_json::to_string(&network).expect("to serialize"), "\"192.168.0.1/24\"");
}

#[test]
fn should_deserialize_from_text() {
    let addr: Address = serde_json::from_str("\"10.0.0.1\"").expect("to deserialize");
    assert_eq!(addr, Address::new(10, 0, 0, 1));

    let network: Network = serde_json::from_str("\"10.0.0.1/8\"").expect("to deserialize");
    assert_eq!(network.addr(), Address::new(10, 0, 0, 1));
    assert_eq!(network.prefix(), 8);

    let networks: Vec<Network> = serde_json::from_str("[\"10.0.0.0/8\", \"172.16.0.0/12\"]").expect("to deserialize");
    assert_eq!(networks.len(), 2);
    assert!(networks[1].contains(Address::new(172, 31, 0, 1)));
}

#[test]
fn should_not_deserialize_invalid_text() {
    let inputs = [
        ("\"256.0.0.1\"", "invalid address part: 256"),
        ("\"10.0.0\"", "invalid address string"),
    ];
    for (json, expected) in inputs {
        let error = serde_json::from_str::<Address>(json).expect_err("should fail");
        assert!(error.to_string().starts_with(expected), "unexpected error={error}");
    }

    let inputs = [
        ("\"10.0.0.1\"", "invalid network string"),
        ("\"10.0.0.1/33\"", "invalid prefix"),
        ("\"1.2.3.4x/8\"", "invalid address part: 4x"),
    ];
    for (json, expected) in inputs {
        let error = serde_json::from_str::<Network>(json).expect_err("should fail");
        assert!(error.to_string().starts_with(expected), "unexpected error={error}");
    }

    assert!(serde_json::from_str::<Address>("167772161").is_err());
}
