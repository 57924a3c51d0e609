use super::*;

#[test]
fn insert_then_list_contains_the_rule() {
    let store = RuleStore::new();
    let rule = Rule::new("suspicious-bash", "exec");
    store.insert(rule.clone());
    assert!(store.list().contains(&rule));
}

#[test]
fn insert_upserts_by_tracer_and_name() {
    let store = RuleStore::new();
    let mut rule = Rule::new("r", "exec");
    rule.actions.push("stdout".to_string());
    store.insert(rule.clone());

    let mut updated = rule.clone();
    updated.actions.push("kill".to_string());
    store.insert(updated.clone());

    let rules = store.rules_for("exec");
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0], updated);
}

#[test]
fn remove_scoped_to_tracer_only_deletes_that_tracer() {
    let store = RuleStore::new();
    store.insert(Rule::new("r", "exec"));
    store.insert(Rule::new("r", "open"));

    store.remove("r", Some("exec"));

    assert!(store.rules_for("exec").is_empty());
    assert_eq!(store.rules_for("open").len(), 1);
}

#[test]
fn remove_without_tracer_deletes_every_matching_name() {
    let store = RuleStore::new();
    store.insert(Rule::new("r", "exec"));
    store.insert(Rule::new("r", "open"));
    store.insert(Rule::new("other", "open"));

    store.remove("r", None);

    assert!(store.rules_for("exec").is_empty());
    let open_rules = store.rules_for("open");
    assert_eq!(open_rules.len(), 1);
    assert_eq!(open_rules[0].name, "other");
}

#[test]
fn rules_for_unknown_tracer_is_empty() {
    let store = RuleStore::new();
    assert!(store.rules_for("nope").is_empty());
}

#[test]
fn list_is_a_snapshot_copy() {
    let store = RuleStore::new();
    store.insert(Rule::new("r", "exec"));
    let mut snapshot = store.list();
    snapshot.clear();
    assert_eq!(store.list().len(), 1);
}
