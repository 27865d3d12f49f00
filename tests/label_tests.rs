use regex::Regex;
use rslotboard::core::TimeLabelFactory;
use rslotboard::errors::ValidationError;

#[test]
fn test_label_is_zero_padded() {
    let slot = TimeLabelFactory::create_label("9", "0", "10", "5").expect("valid input");
    assert_eq!(slot.label.as_str(), "09:00-10:05");
}

#[test]
fn test_label_format_for_every_hour() {
    let re = Regex::new(r"^\d{2}:\d{2}-\d{2}:\d{2}$").unwrap();
    for h in 0..24u32 {
        for m in [0u32, 1, 30, 59] {
            let slot = TimeLabelFactory::create_label_from_parts(h, m, 23 - h, 59 - m)
                .expect("valid parts");
            assert!(re.is_match(slot.label.as_str()), "bad label {}", slot.label);
        }
    }
}

#[test]
fn test_inputs_are_trimmed() {
    let slot = TimeLabelFactory::create_label(" 7 ", "05", "08", " 0").unwrap();
    assert_eq!(slot.label.as_str(), "07:05-08:00");
}

#[test]
fn test_hour_24_rejected() {
    let err = TimeLabelFactory::create_label("24", "0", "10", "0").unwrap_err();
    assert!(matches!(err, ValidationError::OutOfRange { field: "start hour", .. }));
}

#[test]
fn test_minute_60_rejected() {
    let err = TimeLabelFactory::create_label("9", "60", "10", "0").unwrap_err();
    assert!(matches!(err, ValidationError::OutOfRange { field: "start minute", .. }));
}

#[test]
fn test_end_components_checked() {
    assert!(TimeLabelFactory::create_label("9", "0", "25", "0").is_err());
    assert!(TimeLabelFactory::create_label("9", "0", "10", "99").is_err());
    assert!(TimeLabelFactory::create_label_from_parts(9, 0, 10, 60).is_err());
}

#[test]
fn test_non_numeric_rejected() {
    for bad in ["", "abc", "-1", "9.5", "nine"] {
        let err = TimeLabelFactory::create_label(bad, "0", "10", "0").unwrap_err();
        assert!(
            matches!(err, ValidationError::OutOfRange { .. }),
            "'{bad}' should be rejected"
        );
    }
}

#[test]
fn test_identical_inputs_get_distinct_ids() {
    let a = TimeLabelFactory::create_label("9", "0", "10", "0").unwrap();
    let b = TimeLabelFactory::create_label("9", "0", "10", "0").unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(a.label, b.label);
}

#[test]
fn test_range_shorthand() {
    let slot = TimeLabelFactory::create_from_range("9:00 - 10:30").unwrap();
    assert_eq!(slot.label.as_str(), "09:00-10:30");

    assert!(TimeLabelFactory::create_from_range("09:00-24:00").is_err());
    assert!(TimeLabelFactory::create_from_range("09:00 to 10:00").is_err());
}

#[test]
fn test_free_text_label() {
    let slot = TimeLabelFactory::create_free_text("  morning shift ").unwrap();
    assert_eq!(slot.label.as_str(), "morning shift");

    assert_eq!(
        TimeLabelFactory::create_free_text("   ").unwrap_err(),
        ValidationError::Empty
    );
}
