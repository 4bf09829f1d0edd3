use gtdlist_core::{status, CaptureAction, CaptureParser, Category, Energy, Priority};

#[test]
fn plain_phrase_becomes_an_add_draft_with_defaults() {
    let draft = CaptureParser::new().parse("fix the garden gate");

    assert_eq!(draft.action, CaptureAction::Add);
    assert_eq!(draft.item, "fix the garden gate");
    assert_eq!(draft.category, Category::Personal);
    assert_eq!(draft.project, "");
    assert_eq!(draft.context, "@Anywhere");
    assert_eq!(draft.priority, Priority::Medium);
    assert_eq!(draft.status, status::NEXT_ACTION);
    assert!(draft.hints.is_empty());
}

#[test]
fn leading_verb_selects_the_action() {
    let parser = CaptureParser::new();

    let draft = parser.parse("done call the dentist");
    assert_eq!(draft.action, CaptureAction::Complete);
    assert_eq!(draft.item, "call the dentist");
    assert_eq!(draft.context, "@Phone");

    let draft = parser.parse("remove the old gym reminder");
    assert_eq!(draft.action, CaptureAction::Delete);

    let draft = parser.parse("change the proposal deadline");
    assert_eq!(draft.action, CaptureAction::Update);
}

#[test]
fn professional_and_priority_cues_are_detected_and_stripped() {
    let draft = CaptureParser::new().parse("urgent prepare client proposal for work");

    assert_eq!(draft.category, Category::Professional);
    assert_eq!(draft.priority, Priority::Critical);
    assert_eq!(draft.item, "prepare client proposal");
    assert_eq!(
        draft.hints,
        vec![
            "category: Professional".to_string(),
            "priority: Critical".to_string(),
        ]
    );
}

#[test]
fn waiting_phrase_sets_the_blocked_status() {
    let draft = CaptureParser::new().parse("waiting on contractor quotes");

    assert_eq!(draft.status, status::WAITING_FOR);
    assert_eq!(draft.item, "contractor quotes");
    assert_eq!(draft.hints, vec!["status: Waiting For".to_string()]);
}

#[test]
fn someday_phrase_parks_the_task_at_low_priority() {
    let draft = CaptureParser::new().parse("someday learn piano");

    assert_eq!(draft.status, status::SOMEDAY_MAYBE);
    assert_eq!(draft.priority, Priority::Low);
    assert_eq!(draft.item, "learn piano");
}

#[test]
fn recurrence_words_set_a_recurring_status() {
    let parser = CaptureParser::new();
    assert_eq!(parser.parse("review finances monthly").status, "Recurring - Monthly");
    assert_eq!(parser.parse("water plants daily").status, "Recurring - Daily");
}

#[test]
fn project_cues_come_from_the_caller_table() {
    let parser = CaptureParser::new()
        .with_project_cues("Health", ["doctor", "gym", "checkup"])
        .with_project_cues("Finance", ["tax", "insurance"]);

    let draft = parser.parse("schedule doctor checkup");
    assert_eq!(draft.project, "Health");
    assert!(draft.hints.contains(&"project: Health".to_string()));

    let draft = parser.parse("consolidate insurance details");
    assert_eq!(draft.project, "Finance");
}

#[test]
fn into_record_yields_a_valid_task() {
    let draft = CaptureParser::new().parse("urgent buy groceries weekly");
    assert_eq!(draft.context, "@Errands");
    assert_eq!(draft.priority, Priority::Critical);
    assert_eq!(draft.status, "Recurring - Weekly");

    let record = draft.into_record(11);
    assert_eq!(record.id, 11);
    assert_eq!(record.item, "buy groceries");
    assert_eq!(record.energy, Energy::Medium);
    record.validate().expect("captured record should be valid");
}
