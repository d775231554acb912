use radarcli::heuristics::{
    DropReason, NameFilters, is_live_recording, is_re_release, is_remix, is_soundtrack,
    normalize_name,
};

#[test]
fn test_normalize_name_basics() {
    assert_eq!(normalize_name("Album Name"), "album name");
    assert_eq!(normalize_name("  Spaced   Out  "), "spaced out");
    assert_eq!(normalize_name("Title (Deluxe) [2024]"), "title deluxe 2024");
    assert_eq!(normalize_name("Part: One - Two"), "part one two");
}

#[test]
fn test_normalize_name_variants_collapse_to_same_key() {
    let variants = [
        "Great Hits: Part 1",
        "great hits - part 1",
        "Great Hits Part 1",
        "GREAT HITS (Part 1)",
    ];
    let keys: Vec<String> = variants.iter().map(|v| normalize_name(v)).collect();
    assert!(keys.iter().all(|k| k == "great hits part 1"));
}

#[test]
fn test_re_release_detection() {
    assert!(is_re_release("Classic Album (Deluxe)"));
    assert!(is_re_release("Classic Album - 2009 Remaster"));
    assert!(is_re_release("Classic Album Remastered"));
    assert!(is_re_release("Classic Album 10 Year Anniversary"));
    assert!(is_re_release("Classic Album (Expanded Edition)"));
    assert!(is_re_release("Classic Album [Bonus Tracks]"));

    assert!(!is_re_release("Classic Album"));
    assert!(!is_re_release("Demolition"));
}

#[test]
fn test_live_recording_detection() {
    assert!(is_live_recording("Live at Wembley"));
    assert!(is_live_recording("An Evening in Concert"));
    assert!(is_live_recording("Unplugged"));
    assert!(is_live_recording("Songs (Live)"));

    // "live" must stand alone as a word
    assert!(!is_live_recording("Alive"));
    assert!(!is_live_recording("Delivery"));
}

#[test]
fn test_soundtrack_detection() {
    assert!(is_soundtrack("Dune (Original Soundtrack)"));
    assert!(is_soundtrack("Dune OST"));

    assert!(!is_soundtrack("Boston"));
    assert!(!is_soundtrack("Lost Tapes"));
}

#[test]
fn test_remix_detection() {
    assert!(is_remix("Song (Remix)"));
    assert!(is_remix("Song Remixed"));
    assert!(is_remix("Song (Club Rework)"));

    assert!(!is_remix("Premixture"));
    assert!(!is_remix("Song"));
}

#[test]
fn test_classify_drops_everything_by_default() {
    let filters = NameFilters::default();

    assert_eq!(
        filters.classify("Classic Album (Deluxe)"),
        Some(DropReason::ReRelease)
    );
    assert_eq!(
        filters.classify("Live at Wembley"),
        Some(DropReason::LiveRecording)
    );
    assert_eq!(filters.classify("Dune OST"), Some(DropReason::Soundtrack));
    assert_eq!(filters.classify("Song (Remix)"), Some(DropReason::Remix));
    assert_eq!(filters.classify("Plain New Album"), None);
}

#[test]
fn test_classify_respects_keep_flags() {
    let filters = NameFilters {
        keep_live_recordings: true,
        ..NameFilters::default()
    };

    assert_eq!(filters.classify("Live at Wembley"), None);
    assert_eq!(
        filters.classify("Classic Album (Deluxe)"),
        Some(DropReason::ReRelease)
    );
}

#[test]
fn test_classify_order_re_release_before_live() {
    let filters = NameFilters::default();
    assert_eq!(
        filters.classify("Live at Budokan (Remastered)"),
        Some(DropReason::ReRelease)
    );
}

#[test]
fn test_keep_all_keeps_everything() {
    let filters = NameFilters::keep_all();

    assert_eq!(filters.classify("Classic Album (Deluxe)"), None);
    assert_eq!(filters.classify("Live at Wembley"), None);
    assert_eq!(filters.classify("Dune OST"), None);
    assert_eq!(filters.classify("Song (Remix)"), None);
}
