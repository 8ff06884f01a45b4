#[cfg(test)]
mod model_tests {
    use crate::models::{Attribute, AttributeValue, ChargeStatus};

    #[test]
    fn test_attribute_names_are_unique() {
        let mut names: Vec<&str> = Attribute::ALL.iter().map(Attribute::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Attribute::ALL.len());
    }

    #[test]
    fn test_attribute_round_trips_through_name() {
        for attribute in Attribute::ALL {
            assert_eq!(attribute.as_str().parse::<Attribute>().unwrap(), attribute);
        }
    }

    #[test]
    fn test_legacy_attribute_aliases() {
        assert_eq!("chargeCounter".parse::<Attribute>().unwrap(), Attribute::Charge);
        assert_eq!("chargeCount".parse::<Attribute>().unwrap(), Attribute::Charge);
        assert_eq!("temp".parse::<Attribute>().unwrap(), Attribute::Temperature);
        assert_eq!("current_now".parse::<Attribute>().unwrap(), Attribute::Current);
        assert_eq!("voltageNow".parse::<Attribute>().unwrap(), Attribute::Voltage);
    }

    #[test]
    fn test_unknown_attribute() {
        assert!("incorrectattribute".parse::<Attribute>().is_err());
        assert!("Capacity".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_value_from_raw() {
        assert_eq!(AttributeValue::from_raw("76"), AttributeValue::Int(76));
        assert_eq!(AttributeValue::from_raw("-1200"), AttributeValue::Int(-1200));
        assert_eq!(
            AttributeValue::from_raw("Good"),
            AttributeValue::Text("Good".to_string())
        );
        assert_eq!(
            AttributeValue::from_raw("4.2"),
            AttributeValue::Text("4.2".to_string())
        );
    }

    #[test]
    fn test_value_accessors_and_display() {
        let int = AttributeValue::Int(42);
        assert_eq!(int.as_int(), Some(42));
        assert_eq!(int.as_text(), None);
        assert_eq!(int.to_string(), "42");

        let text = AttributeValue::Text("Li-ion".to_string());
        assert_eq!(text.as_int(), None);
        assert_eq!(text.as_text(), Some("Li-ion"));
        assert_eq!(text.to_string(), "Li-ion");
    }

    #[test]
    fn test_value_serializes_untagged() {
        let json = serde_json::to_string(&vec![
            AttributeValue::Int(5),
            AttributeValue::Text("Full".to_string()),
        ])
        .unwrap();
        assert_eq!(json, r#"[5,"Full"]"#);
    }

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!("Charging".parse::<ChargeStatus>().unwrap(), ChargeStatus::Charging);
        assert_eq!("FULL".parse::<ChargeStatus>().unwrap(), ChargeStatus::Full);
        assert_eq!(
            "Not charging".parse::<ChargeStatus>().unwrap(),
            ChargeStatus::NotCharging
        );
        assert!("sparkling".parse::<ChargeStatus>().is_err());
    }

    #[test]
    fn test_status_glyphs() {
        assert_eq!(ChargeStatus::Charging.glyph(), '+');
        assert_eq!(ChargeStatus::Full.glyph(), '#');
        assert_eq!(ChargeStatus::Discharging.glyph(), 'x');
        assert_eq!(ChargeStatus::NotCharging.glyph(), 'x');
        assert_eq!(ChargeStatus::Unknown.glyph(), 'x');
    }
}
