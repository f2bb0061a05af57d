use super::*;

// =============================================================
// CampaignState mapping
// =============================================================

#[test]
fn state_codes_map_to_lifecycle_labels() {
    assert_eq!(CampaignState::from_code(0), CampaignState::Active);
    assert_eq!(CampaignState::from_code(1), CampaignState::Successful);
    assert_eq!(CampaignState::from_code(2), CampaignState::Failed);
    assert_eq!(CampaignState::from_code(0).label(), "Active");
    assert_eq!(CampaignState::from_code(1).label(), "Successful");
    assert_eq!(CampaignState::from_code(2).label(), "Failed");
}

#[test]
fn out_of_range_state_is_unknown() {
    assert_eq!(CampaignState::from_code(3), CampaignState::Unknown(3));
    assert_eq!(CampaignState::from_code(255).label(), "Unknown");
}

// =============================================================
// Funding percentage
// =============================================================

#[test]
fn quarter_funded_is_25_percent() {
    let pct = funding_percentage(250, 1000);
    assert!((pct - 25.0).abs() < f64::EPSILON);
}

#[test]
fn overfunded_clamps_to_100() {
    let pct = funding_percentage(1200, 1000);
    assert!((pct - 100.0).abs() < f64::EPSILON);
}

#[test]
fn exactly_funded_is_100() {
    let pct = funding_percentage(1000, 1000);
    assert!((pct - 100.0).abs() < f64::EPSILON);
}

#[test]
fn zero_goal_is_defined_as_zero_percent() {
    assert!(funding_percentage(0, 0).abs() < f64::EPSILON);
    assert!(funding_percentage(500, 0).abs() < f64::EPSILON);
}

#[test]
fn zero_balance_is_zero_percent() {
    assert!(funding_percentage(0, 1000).abs() < f64::EPSILON);
}

#[test]
fn percentage_is_never_nan_or_infinite() {
    for (b, g) in [(0, 0), (1, 0), (u64::MAX, 1), (1, u64::MAX)] {
        let pct = funding_percentage(b, g);
        assert!(pct.is_finite(), "balance={b} goal={g} produced {pct}");
        assert!((0.0..=100.0).contains(&pct));
    }
}

// =============================================================
// Deadline
// =============================================================

#[test]
fn deadline_flag_flips_around_the_timestamp() {
    let deadline = 1_700_000_000;
    assert!(!deadline_passed(deadline, deadline - 1));
    assert!(!deadline_passed(deadline, deadline));
    assert!(deadline_passed(deadline, deadline + 1));
}

#[test]
fn format_deadline_renders_a_calendar_date() {
    // 2023-11-14T22:13:20Z
    assert_eq!(format_deadline(1_700_000_000), "2023-11-14");
}

#[test]
fn format_deadline_epoch() {
    assert_eq!(format_deadline(0), "1970-01-01");
}

#[test]
fn format_deadline_unrepresentable_falls_back_to_raw_seconds() {
    assert_eq!(format_deadline(u64::MAX), u64::MAX.to_string());
}

// =============================================================
// Serde shapes
// =============================================================

#[test]
fn tier_round_trips() {
    let tier = Tier { name: "Gold".to_owned(), amount: 500, backers: 3 };
    let json = serde_json::to_string(&tier).unwrap();
    let back: Tier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tier);
}

#[test]
fn campaign_summary_round_trips() {
    let summary = CampaignSummary {
        address: Address::parse("0x00112233445566778899aabbccddeeff00112233").unwrap(),
        owner: Address::parse("0xB357314beCc756859bAF2976A59D00658C94F296").unwrap(),
        name: "Solar Farm".to_owned(),
        creation_time: 1_700_000_000,
    };
    let json = serde_json::to_string(&summary).unwrap();
    let back: CampaignSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}
