use super::*;

// ============================================================================
// submit_label
// ============================================================================

#[test]
fn submit_label_idle() {
    assert_eq!(submit_label(SubmitPhase::Idle), "Create Campaign");
}

#[test]
fn submit_label_while_submitting() {
    assert_eq!(submit_label(SubmitPhase::Submitting), "Creating Campaign...");
}

// ============================================================================
// form coercion feeding validation
// ============================================================================

#[test]
fn coerced_defaults_pass_validation_with_text_fields() {
    let form = CampaignForm {
        name: "Solar Farm".to_owned(),
        description: "Panels for the co-op".to_owned(),
        goal: CampaignForm::coerce_goal("0"),
        duration_days: CampaignForm::coerce_duration("-3"),
    };
    let request = form.validate().unwrap();
    assert_eq!(request.goal, 1);
    assert_eq!(request.duration_in_days, 1);
}

#[test]
fn cleared_goal_fails_validation() {
    let form = CampaignForm {
        name: "Solar Farm".to_owned(),
        description: "Panels for the co-op".to_owned(),
        goal: CampaignForm::coerce_goal(""),
        duration_days: 30,
    };
    assert!(form.validate().is_err());
}
