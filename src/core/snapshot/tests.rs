use super::*;

#[test]
fn iterates_in_insertion_order() {
    let snapshot: Snapshot = [("zsh", "5.9-1"), ("bash", "5.2-1"), ("fish", "4.0-1")]
        .into_iter()
        .collect();

    let names: Vec<_> = snapshot.names().collect();
    assert_eq!(names, vec!["zsh", "bash", "fish"]);
}

#[test]
fn last_write_wins_and_keeps_position() {
    let mut snapshot = Snapshot::new();
    assert_eq!(snapshot.insert("glibc", "2.41-1"), None);
    snapshot.insert("bash", "5.2-1");

    let previous = snapshot.insert("glibc", "2.42-3");
    assert_eq!(previous.as_deref(), Some("2.41-1"));

    let pairs: Vec<_> = snapshot.iter().collect();
    assert_eq!(pairs, vec![("glibc", "2.42-3"), ("bash", "5.2-1")]);
    assert_eq!(snapshot.len(), 2);
}

#[test]
fn lookups() {
    let snapshot: Snapshot = [("vim", "9.1-1")].into_iter().collect();

    assert!(snapshot.contains("vim"));
    assert!(!snapshot.contains("emacs"));
    assert_eq!(snapshot.get("vim"), Some("9.1-1"));
    assert_eq!(snapshot.get("emacs"), None);
}

#[test]
fn equality_is_order_sensitive() {
    let a: Snapshot = [("a", "1"), ("b", "1")].into_iter().collect();
    let b: Snapshot = [("b", "1"), ("a", "1")].into_iter().collect();
    let c: Snapshot = [("a", "1"), ("b", "1")].into_iter().collect();

    assert_ne!(a, b);
    assert_eq!(a, c);
}

#[test]
fn empty_snapshot() {
    let snapshot = Snapshot::new();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.iter().count(), 0);
}
