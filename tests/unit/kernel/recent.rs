use super::*;

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

fn record_all(recent: &mut RecentFiles, names: &[&str]) {
    for name in names {
        recent.record_access(Path::new(name));
    }
}

#[test]
fn starts_empty_with_default_capacity() {
    let recent = RecentFiles::default();
    assert!(recent.is_empty());
    assert_eq!(recent.capacity(), DEFAULT_RECENT_CAPACITY);
    assert_eq!(recent.list(), Vec::<PathBuf>::new());
}

#[test]
fn six_records_into_five_slots_evict_the_oldest() {
    let mut recent = RecentFiles::new(5);
    record_all(&mut recent, &["a", "b", "c", "d", "e", "f"]);

    assert_eq!(recent.list(), paths(&["f", "e", "d", "c", "b"]));
}

#[test]
fn re_recording_moves_to_front_without_duplicating() {
    let mut recent = RecentFiles::new(5);
    record_all(&mut recent, &["a", "b", "a"]);

    assert_eq!(recent.list(), paths(&["a", "b"]));
}

#[test]
fn recording_twice_in_a_row_keeps_single_front_entry() {
    let mut recent = RecentFiles::new(3);
    record_all(&mut recent, &["x", "y", "y"]);

    let list = recent.list();
    assert_eq!(list.iter().filter(|p| p.as_path() == Path::new("y")).count(), 1);
    assert_eq!(list[0], PathBuf::from("y"));
}

#[test]
fn re_recording_from_the_tail_keeps_everyone_else() {
    let mut recent = RecentFiles::new(3);
    record_all(&mut recent, &["a", "b", "c", "a"]);

    assert_eq!(recent.list(), paths(&["a", "c", "b"]));
}

#[test]
fn never_exceeds_capacity() {
    let mut recent = RecentFiles::new(4);
    for i in 0..50 {
        recent.record_access(Path::new(&format!("file{}", i % 7)));
        assert!(recent.len() <= recent.capacity());
    }
    assert_eq!(recent.len(), 4);
}

#[test]
fn zero_capacity_is_raised_to_one() {
    let mut recent = RecentFiles::new(0);
    record_all(&mut recent, &["a", "b"]);

    assert_eq!(recent.capacity(), 1);
    assert_eq!(recent.list(), paths(&["b"]));
}

#[test]
fn list_is_a_snapshot() {
    let mut recent = RecentFiles::new(5);
    record_all(&mut recent, &["a"]);

    let mut snapshot = recent.list();
    snapshot.push(PathBuf::from("z"));

    assert_eq!(recent.list(), paths(&["a"]));
    assert_eq!(recent.get(0), Some(Path::new("a")));
    assert_eq!(recent.get(1), None);
}
