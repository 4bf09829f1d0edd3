use gtdlist_core::{status, Category, Energy, Priority, TaskRecord, TaskValidationError};

#[test]
fn new_record_uses_capture_defaults() {
    let record = TaskRecord::new(3, "water the plants");

    assert_eq!(record.id, 3);
    assert_eq!(record.item, "water the plants");
    assert_eq!(record.category, Category::Personal);
    assert_eq!(record.project, "");
    assert_eq!(record.context, "@Anywhere");
    assert_eq!(record.priority, Priority::Medium);
    assert_eq!(record.status, status::NEXT_ACTION);
    assert_eq!(record.energy, Energy::Medium);
    assert_eq!(record.time, "");
    assert_eq!(record.notes, "");
    assert_eq!(record.waiting_for, None);
    assert_eq!(record.due, None);
    record.validate().expect("defaults should be valid");
}

#[test]
fn validate_rejects_zero_id() {
    let record = TaskRecord::new(0, "anything");
    assert_eq!(
        record.validate().unwrap_err(),
        TaskValidationError::NonPositiveId
    );
}

#[test]
fn validate_rejects_blank_item() {
    let record = TaskRecord::new(9, "   ");
    assert_eq!(
        record.validate().unwrap_err(),
        TaskValidationError::EmptyItem { id: 9 }
    );
}

#[test]
fn validate_rejects_blank_category_label() {
    let mut record = TaskRecord::new(9, "file taxes");
    record.category = Category::Other(String::new());
    assert_eq!(
        record.validate().unwrap_err(),
        TaskValidationError::EmptyCategory { id: 9 }
    );
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut record = TaskRecord::new(12, "Safety Sense project");
    record.category = Category::Professional;
    record.project = "Riyadh Air".to_string();
    record.context = "@Computer".to_string();
    record.status = status::WAITING_FOR.to_string();
    record.energy = Energy::Low;
    record.time = "30 min".to_string();
    record.notes = "Under client feedback".to_string();
    record.waiting_for = Some("Client feedback".to_string());

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 12);
    assert_eq!(json["item"], "Safety Sense project");
    assert_eq!(json["category"], "Professional");
    assert_eq!(json["priority"], "Medium");
    assert_eq!(json["energy"], "Low");
    assert_eq!(json["status"], "Waiting For");
    assert_eq!(json["waiting_for"], "Client feedback");
    // absent optional fields are omitted keys, not nulls
    assert!(json.get("due").is_none());

    let decoded: TaskRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn missing_optional_wire_fields_default_cleanly() {
    let json = serde_json::json!({
        "id": 5,
        "item": "Cybersecurity project - going live",
        "category": "Professional",
        "project": "CAA",
        "context": "@Office",
        "priority": "High",
        "status": "Next Action",
        "energy": "High",
        "time": "2 hours"
    });

    let decoded: TaskRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.notes, "");
    assert_eq!(decoded.waiting_for, None);
    assert_eq!(decoded.due, None);
}

#[test]
fn unknown_category_is_preserved_verbatim() {
    let category = Category::from("Volunteering".to_string());
    assert_eq!(category, Category::Other("Volunteering".to_string()));
    assert_eq!(category.as_str(), "Volunteering");

    let json = serde_json::to_value(&category).unwrap();
    assert_eq!(json, "Volunteering");
}

#[test]
fn unknown_priority_fails_deserialization() {
    let err = serde_json::from_value::<Priority>(serde_json::json!("Extreme")).unwrap_err();
    assert!(err.to_string().contains("Extreme"), "unexpected error: {err}");
}

#[test]
fn status_helpers_recognize_recurrence_and_urgency() {
    let mut record = TaskRecord::new(8, "review weekly goals");
    record.status = "Recurring - Weekly".to_string();
    assert!(record.is_recurring());
    assert!(!record.is_high_priority());

    record.priority = Priority::Critical;
    assert!(record.is_high_priority());
}
