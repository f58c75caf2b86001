#![cfg(feature = "serde")]

use cron_spec::{parse_standard, Location, ParseOptions, Result, Schedule};

#[test]
fn schedule() -> Result<()> {
    let schedule = parse_standard("TZ=UTC */30 * * * *")?;
    let json = serde_json::to_string(&schedule).unwrap();
    assert!(json.contains("\"UTC\""), "json = {json}");

    let restored: Schedule = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, schedule);

    Ok(())
}

#[test]
fn options() {
    let options: ParseOptions = serde_json::from_str(r#"["SecondOptional", "Minute", "Hour", "Dom", "Month", "Dow"]"#).unwrap();
    assert_eq!(options.field_count(), (5, 6));
    assert_eq!(
        serde_json::to_string(&options).unwrap(),
        r#"["SecondOptional","Minute","Hour","Dom","Month","Dow"]"#
    );

    let invalid = serde_json::from_str::<ParseOptions>(r#"["SecondOptional", "DowOptional"]"#);
    assert!(invalid.is_err());

    let bad_location = serde_json::from_str::<Location>(r#""Nowhere/Land""#);
    assert!(bad_location.is_err());
}
