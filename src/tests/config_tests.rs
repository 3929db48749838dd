use crate::{LruConfig, LruError, OrderedLru};

#[test]
fn test_config_parse() -> Result<(), anyhow::Error> {
    let config = LruConfig::from_json_str(r#"{ "capacity": 2 }"#)?;
    assert_eq!(config.capacity(), 2);
    assert_eq!(config, LruConfig::new(2));

    let mut cache: OrderedLru<&str, u8> = config.build();
    cache.extend([("a", 1), ("b", 2), ("c", 3)]);
    assert_eq!(cache.capacity(), 2);
    assert_eq!(cache.len(), 2, "Built cache should enforce the configured capacity");
    Ok(())
}

#[test]
fn test_config_rejects_negative_capacity() {
    match LruConfig::from_json_str(r#"{ "capacity": -3 }"#) {
        Err(LruError::InvalidCapacity(raw)) => assert_eq!(raw, -3),
        other => panic!("Negative capacity should be rejected, got {:?}", other),
    }
}

#[test]
fn test_config_capacity_range() -> Result<(), anyhow::Error> {
    #[cfg(target_pointer_width = "64")]
    {
        let config = LruConfig::from_json_str(r#"{ "capacity": 18446744073709551615 }"#)?;
        assert_eq!(config.capacity(), usize::MAX, "Largest usize capacity should be accepted");
    }

    // 2^70 does not fit any usize
    match LruConfig::from_json_str(r#"{ "capacity": 1180591620717411303424 }"#) {
        Err(LruError::InvalidCapacity(raw)) => assert_eq!(raw, 1i128 << 70),
        other => panic!("Oversized capacity should be an invalid capacity, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_config_rejects_malformed_input() {
    for input in [
        "",
        "{}",
        r#"{ "capacity": "three" }"#,
        r#"{ "capacity": 1.5 }"#,
        r#"{ "capacity": 3, "ttl": 10 }"#,
    ] {
        assert!(
            matches!(LruConfig::from_json_str(input), Err(LruError::Config(_))),
            "Malformed config was accepted: {input:?}"
        );
    }
}

#[test]
fn test_config_serializes() -> Result<(), anyhow::Error> {
    let json = serde_json::to_string(&LruConfig::new(16))?;
    assert_eq!(json, r#"{"capacity":16}"#);
    assert_eq!(LruConfig::from_json_str(&json)?, LruConfig::new(16));
    Ok(())
}
