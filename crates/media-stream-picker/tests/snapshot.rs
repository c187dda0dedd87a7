//! Tests for snapshot assembly, labeling, and identity strings.

use media_stream_picker::{FULLSCREEN_FILE_NAME, Snapshot, SourceId, Thumbnail};

mod mocks;

use mocks::{screen, snapshot, window};

#[test]
fn single_screen_is_labelled_entire_screen() {
    let snapshot = snapshot(1, &[]);
    assert_eq!(snapshot.screens()[0].title(), "Entire Screen");
}

#[test]
fn multiple_screens_are_numbered_in_discovery_order() {
    let snapshot = snapshot(3, &[]);
    let titles: Vec<&str> = snapshot.screens().iter().map(|s| s.title()).collect();
    assert_eq!(titles, ["Screen 1", "Screen 2", "Screen 3"]);
}

#[test]
fn screens_come_before_windows() {
    let snapshot = snapshot(2, &[(10, "Editor"), (20, "Browser")]);

    assert_eq!(snapshot.len(), 4);
    assert_eq!(snapshot.screens().len(), 2);
    assert_eq!(snapshot.windows().len(), 2);

    assert!(matches!(snapshot.sources()[0].id(), SourceId::Screen(0)));
    assert!(matches!(snapshot.sources()[1].id(), SourceId::Screen(1)));
    assert!(matches!(snapshot.sources()[2].id(), SourceId::Window(10)));
    assert!(matches!(snapshot.sources()[3].id(), SourceId::Window(20)));
}

#[test]
fn zero_screens_yields_a_windows_only_snapshot() {
    let snapshot = snapshot(0, &[(10, "Editor")]);

    assert!(snapshot.screens().is_empty());
    assert_eq!(snapshot.windows().len(), 1);
}

#[test]
fn screens_carry_the_fullscreen_file_name() {
    let snapshot = snapshot(1, &[(10, "Editor")]);

    assert_eq!(snapshot.screens()[0].file_name_hint(), FULLSCREEN_FILE_NAME);
    assert_eq!(snapshot.windows()[0].file_name_hint(), "app10.exe");
}

#[test]
fn media_stream_identities_match_the_backend_format() {
    let snapshot = Snapshot::assemble(vec![screen(0)], vec![window(81224, "Editor")]);

    assert_eq!(snapshot.sources()[0].media_stream_identity(), "screen:0:0");
    assert_eq!(
        snapshot.sources()[1].media_stream_identity(),
        "window:81224:0"
    );
}

#[test]
fn thumbnail_rejects_mismatched_buffers() {
    assert!(Thumbnail::from_bgra(2, 2, vec![0u8; 15]).is_err());
    assert!(Thumbnail::from_bgra(2, 2, vec![0u8; 16]).is_ok());
}

#[test]
fn snapshots_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Snapshot>();
    assert_send_sync::<Thumbnail>();
}
