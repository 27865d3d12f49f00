use rslotboard::core::ColumnStore;
use rslotboard::core::placement::{
    DropOutcome, apply_drop, apply_drop_traced, apply_event, apply_event_traced, delete_entity,
};
use rslotboard::models::{ColumnName, DragEnd, EntityId, SlotLabel, TimeSlot};

fn slot(label: &str) -> TimeSlot {
    TimeSlot::new(SlotLabel::new(label))
}

fn store_with(column: ColumnName, entity: &TimeSlot) -> ColumnStore {
    let mut store = ColumnStore::new();
    store.append(column, entity.clone());
    store
}

#[test]
fn test_copy_from_generator_keeps_template() {
    let e = slot("09:00-10:00");
    let store = store_with(ColumnName::Generator, &e);

    let next = apply_drop(store, e.id, ColumnName::Monday);

    assert_eq!(next.column(ColumnName::Generator), &[e.clone()]);
    let monday = next.column(ColumnName::Monday);
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].label, e.label);
    assert_ne!(monday[0].id, e.id);
}

#[test]
fn test_copy_dedups_by_label() {
    let e = slot("09:00-10:00");
    let store = store_with(ColumnName::Generator, &e);

    let once = apply_drop(store, e.id, ColumnName::Monday);
    let (twice, outcome) = apply_drop_traced(once.clone(), e.id, ColumnName::Monday);

    assert_eq!(outcome, DropOutcome::NoOp);
    assert_eq!(twice, once);
    assert_eq!(twice.column(ColumnName::Monday).len(), 1);
}

#[test]
fn test_copy_dedup_ignores_other_generator_instances() {
    // two templates with the same label still land only once per day
    let a = slot("09:00-10:00");
    let b = slot("09:00-10:00");
    let mut store = ColumnStore::new();
    store.append(ColumnName::Generator, a.clone());
    store.append(ColumnName::Generator, b.clone());

    let store = apply_drop(store, a.id, ColumnName::Friday);
    let store = apply_drop(store, b.id, ColumnName::Friday);

    assert_eq!(store.column(ColumnName::Friday).len(), 1);
}

#[test]
fn test_one_template_fills_many_days() {
    let e = slot("13:00-14:00");
    let mut store = store_with(ColumnName::Generator, &e);
    for day in ColumnName::WEEKDAYS {
        store = apply_drop(store, e.id, day);
    }

    for day in ColumnName::WEEKDAYS {
        assert_eq!(store.column(day).len(), 1, "{day} should hold one copy");
    }
    assert_eq!(store.len(), 8);
}

#[test]
fn test_move_between_weekdays() {
    let m = slot("09:00-10:00");
    let store = store_with(ColumnName::Monday, &m);

    let (next, outcome) = apply_drop_traced(store, m.id, ColumnName::Tuesday);

    assert_eq!(
        outcome,
        DropOutcome::Moved {
            from: ColumnName::Monday,
            to: ColumnName::Tuesday
        }
    );
    assert!(next.column(ColumnName::Monday).is_empty());
    assert_eq!(next.column(ColumnName::Tuesday), &[m]);
}

#[test]
fn test_move_does_not_dedup_by_label() {
    let a = slot("09:00-10:00");
    let b = slot("09:00-10:00");
    let mut store = ColumnStore::new();
    store.append(ColumnName::Monday, a.clone());
    store.append(ColumnName::Tuesday, b.clone());

    let next = apply_drop(store, a.id, ColumnName::Tuesday);
    assert_eq!(next.column(ColumnName::Tuesday), &[b, a]);
}

#[test]
fn test_move_skips_duplicate_id_in_target() {
    let m = slot("09:00-10:00");
    let mut store = ColumnStore::new();
    store.append(ColumnName::Monday, m.clone());
    store.append(ColumnName::Friday, m.clone());

    let (next, outcome) = apply_drop_traced(store, m.id, ColumnName::Friday);
    assert_eq!(
        outcome,
        DropOutcome::Moved {
            from: ColumnName::Monday,
            to: ColumnName::Friday
        }
    );
    assert!(next.column(ColumnName::Monday).is_empty());
    assert_eq!(next.column(ColumnName::Friday), &[m]);
}

#[test]
fn test_move_back_into_generator() {
    let m = slot("09:00-10:00");
    let store = store_with(ColumnName::Wednesday, &m);

    let next = apply_drop(store, m.id, ColumnName::Generator);
    assert!(next.column(ColumnName::Wednesday).is_empty());
    assert_eq!(next.column(ColumnName::Generator), &[m]);
}

#[test]
fn test_same_column_drop_is_noop() {
    let m = slot("09:00-10:00");
    let mut store = store_with(ColumnName::Monday, &m);
    store.append(ColumnName::Monday, slot("10:00-11:00"));
    let before = store.clone();

    let (next, outcome) = apply_drop_traced(store, m.id, ColumnName::Monday);
    assert_eq!(outcome, DropOutcome::NoOp);
    assert_eq!(next, before);

    let e = slot("x");
    let pool = store_with(ColumnName::Generator, &e);
    assert_eq!(apply_drop(pool.clone(), e.id, ColumnName::Generator), pool);
}

#[test]
fn test_unknown_source_is_noop() {
    let store = store_with(ColumnName::Monday, &slot("a"));
    let before = store.clone();
    assert_eq!(apply_drop(store, EntityId::fresh(), ColumnName::Sunday), before);
}

#[test]
fn test_caller_copy_is_untouched() {
    let e = slot("09:00-10:00");
    let original = store_with(ColumnName::Generator, &e);
    let snapshot = original.clone();

    let _next = apply_drop(original.clone(), e.id, ColumnName::Monday);
    assert_eq!(original, snapshot);
}

#[test]
fn test_drag_end_without_target() {
    let m = slot("a");
    let store = store_with(ColumnName::Monday, &m);
    let before = store.clone();

    let next = apply_event(store, &DragEnd::new(m.id, None));
    assert_eq!(next, before);

    let next = apply_event(next, &DragEnd::new(m.id, Some(ColumnName::Saturday)));
    assert_eq!(next.column(ColumnName::Saturday), &[m]);
}

#[test]
fn test_traced_event_reports_outcome() {
    let e = slot("09:00-10:00");
    let store = store_with(ColumnName::Generator, &e);

    let (store, outcome) = apply_event_traced(store, &DragEnd::new(e.id, None));
    assert_eq!(outcome, DropOutcome::NoOp);

    let ev = DragEnd::from_raw(&e.id.to_string(), Some("sun")).unwrap();
    let (store, outcome) = apply_event_traced(store, &ev);
    let DropOutcome::Copied { new_id, to } = outcome else {
        panic!("expected Copied, got {outcome:?}");
    };
    assert_eq!(to, ColumnName::Sunday);
    assert_eq!(store.column(ColumnName::Sunday)[0].id, new_id);
}

#[test]
fn test_drag_end_from_raw_payload() {
    let id = EntityId::fresh();
    let raw = id.to_string();

    let ev = DragEnd::from_raw(&raw, Some("星期五")).unwrap();
    assert_eq!(ev.over_id, Some(ColumnName::Friday));

    let ev = DragEnd::from_raw(&raw, Some("nowhere")).unwrap();
    assert_eq!(ev.over_id, None);

    let ev = DragEnd::from_raw(&raw, None).unwrap();
    assert_eq!(ev.active_id, id);
    assert_eq!(ev.over_id, None);

    assert!(DragEnd::from_raw("not-an-id", Some("Monday")).is_none());
}

#[test]
fn test_delete_removes_everywhere() {
    let e = slot("a");
    let mut store = ColumnStore::new();
    store.append(ColumnName::Monday, e.clone());
    store.append(ColumnName::Thursday, e.clone());

    let next = delete_entity(store, e.id);
    assert!(next.is_empty());
}

#[test]
fn test_delete_absent_id_is_noop() {
    let store = store_with(ColumnName::Monday, &slot("a"));
    let before = store.clone();
    assert_eq!(delete_entity(store, EntityId::fresh()), before);
}

#[test]
fn test_template_and_copy_are_independent() {
    let e = slot("09:00-10:00");
    let store = store_with(ColumnName::Generator, &e);
    let store = apply_drop(store, e.id, ColumnName::Monday);
    let copy_id = store.column(ColumnName::Monday)[0].id;

    // deleting the template keeps the Monday copy
    let without_template = delete_entity(store.clone(), e.id);
    assert!(without_template.column(ColumnName::Generator).is_empty());
    assert_eq!(without_template.column(ColumnName::Monday).len(), 1);

    // deleting the copy keeps the template
    let without_copy = delete_entity(store, copy_id);
    assert_eq!(without_copy.column(ColumnName::Generator), &[e]);
    assert!(without_copy.column(ColumnName::Monday).is_empty());
}
