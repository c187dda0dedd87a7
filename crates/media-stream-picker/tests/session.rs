//! Tests for the interactive picker session.

use core::time::Duration;
use std::{
    sync::{Arc, Mutex},
    thread,
    time::Instant,
};

use media_stream_picker::{PickerEvent, PickerSession};

mod mocks;

use mocks::{ScriptedEnumerator, snapshot};

/// Long enough that the background scheduler stays silent during a test.
const QUIET_INTERVAL: Duration = Duration::from_secs(3600);

/// Fast ticks for tests that need a live refresh to land.
const FAST_INTERVAL: Duration = Duration::from_millis(10);

/// Pump until the session accepts a rebuilt list.
fn wait_for_rebuild(session: &mut PickerSession) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if session.pump_refreshes() {
            return;
        }
        assert!(Instant::now() < deadline, "no snapshot was accepted in time");
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn start_accepts_an_initial_snapshot_synchronously() {
    let (enumerator, _queue) = ScriptedEnumerator::new(snapshot(1, &[(10, "Editor")]));
    let session = PickerSession::start_with_interval(enumerator, QUIET_INTERVAL).unwrap();

    assert_eq!(session.sources().len(), 2);
    assert_eq!(session.selected_index(), None);
    assert!(!session.is_share_enabled());
    assert_eq!(
        session.media_stream_identities(),
        ["screen:0:0".to_owned(), "window:10:0".to_owned()]
    );
}

#[test]
fn selecting_a_valid_entry_enables_sharing() {
    let (enumerator, _queue) = ScriptedEnumerator::new(snapshot(1, &[(10, "Editor")]));
    let mut session = PickerSession::start_with_interval(enumerator, QUIET_INTERVAL).unwrap();

    session.select(Some(1));

    assert_eq!(session.selected_index(), Some(1));
    assert!(session.is_share_enabled());
}

#[test]
fn out_of_bounds_selection_is_treated_as_none() {
    let (enumerator, _queue) = ScriptedEnumerator::new(snapshot(1, &[(10, "Editor")]));
    let mut session = PickerSession::start_with_interval(enumerator, QUIET_INTERVAL).unwrap();

    session.select(Some(5));
    assert_eq!(session.selected_index(), None);
    assert!(!session.is_share_enabled());
    assert_eq!(session.share(), None);

    session.select(None);
    assert_eq!(session.selected_index(), None);
    assert!(!session.is_share_enabled());
}

#[test]
fn share_produces_the_selected_descriptor() {
    let (enumerator, _queue) = ScriptedEnumerator::new(snapshot(1, &[(81224, "Editor")]));
    let mut session = PickerSession::start_with_interval(enumerator, QUIET_INTERVAL).unwrap();

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    session.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    session.select(Some(1));
    let request = session.share().expect("selection is valid");

    assert_eq!(request.media_stream_identity, "window:81224:0");
    assert_eq!(request.file_name, "app81224.exe");
    assert_eq!(request.title, "Editor");

    let events = events.lock().unwrap();
    assert!(
        events
            .iter()
            .any(|event| matches!(event, PickerEvent::ShareRequested(r) if *r == request))
    );
}

#[test]
fn cancel_is_emitted_regardless_of_selection() {
    let (enumerator, _queue) = ScriptedEnumerator::new(snapshot(1, &[]));
    let mut session = PickerSession::start_with_interval(enumerator, QUIET_INTERVAL).unwrap();

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    session.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    session.cancel();

    assert!(
        events
            .lock()
            .unwrap()
            .iter()
            .any(|event| matches!(event, PickerEvent::Cancelled))
    );
}

#[test]
fn accepting_a_snapshot_resets_the_selection() {
    let (enumerator, queue) = ScriptedEnumerator::new(snapshot(1, &[(10, "Editor")]));
    let mut session = PickerSession::start_with_interval(enumerator, FAST_INTERVAL).unwrap();

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    session.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    // Index 1 stays in bounds for the next snapshot; it must be cleared
    // anyway, indices are not stable across rebuilds.
    session.select(Some(1));
    assert!(session.is_share_enabled());

    queue
        .lock()
        .unwrap()
        .push_back(snapshot(1, &[(10, "Editor"), (20, "Browser")]));
    wait_for_rebuild(&mut session);

    assert_eq!(session.sources().len(), 3);
    assert_eq!(session.selected_index(), None);
    assert!(!session.is_share_enabled());
    assert_eq!(session.share(), None);

    let events = events.lock().unwrap();
    assert!(
        events
            .iter()
            .any(|event| matches!(event, PickerEvent::SourcesChanged))
    );
    assert!(
        events
            .iter()
            .any(|event| matches!(event, PickerEvent::ShareEnabledChanged { enabled: false }))
    );
}

#[test]
fn unchanged_enumerations_do_not_rebuild() {
    let (enumerator, _queue) = ScriptedEnumerator::new(snapshot(1, &[(10, "Editor")]));
    let mut session = PickerSession::start_with_interval(enumerator, FAST_INTERVAL).unwrap();

    session.select(Some(0));

    // The scheduler keeps re-enumerating the same snapshot; none of those
    // cycles may disturb the selection.
    thread::sleep(Duration::from_millis(100));
    assert!(!session.pump_refreshes());
    assert_eq!(session.selected_index(), Some(0));
}

#[test]
fn selection_events_fire_only_on_change() {
    let (enumerator, _queue) = ScriptedEnumerator::new(snapshot(1, &[(10, "Editor")]));
    let mut session = PickerSession::start_with_interval(enumerator, QUIET_INTERVAL).unwrap();

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    session.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    session.select(Some(0));
    session.select(Some(0));

    let selection_changes = events
        .lock()
        .unwrap()
        .iter()
        .filter(|event| matches!(event, PickerEvent::SelectionChanged { .. }))
        .count();
    assert_eq!(selection_changes, 1);
}

#[test]
fn unsubscribed_observers_stop_receiving_events() {
    let (enumerator, _queue) = ScriptedEnumerator::new(snapshot(1, &[(10, "Editor")]));
    let mut session = PickerSession::start_with_interval(enumerator, QUIET_INTERVAL).unwrap();

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let id = session.subscribe(move |event: &PickerEvent| sink.lock().unwrap().push(event.clone()));

    assert!(session.unsubscribe(id));
    assert!(!session.unsubscribe(id));

    session.select(Some(0));
    assert!(events.lock().unwrap().is_empty());
}
