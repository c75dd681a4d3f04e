use directapply::app::{AppState, Event, Feedback};
use directapply::catalog::MockCatalog;
use directapply::gesture::Decision;
use directapply::runtime::Session;
use directapply::sinks::MemorySink;
use directapply::JobPosting;

fn session_with(sink: &MemorySink) -> Session {
    Session::new(AppState::default(), Box::new(MockCatalog))
        .with_application_sink(Box::new(sink.clone()))
        .with_feedback_sink(Box::new(sink.clone()))
        .with_auto_finish(true)
}

fn drag(session: &mut Session, dx: f64) {
    session.dispatch(Event::PointerDown { x: 100.0, y: 300.0 });
    session.dispatch(Event::PointerMove { x: 100.0 + dx, y: 310.0 });
    session.dispatch(Event::PointerUp);
}

#[test]
fn drag_right_applies_and_notifies_sink() {
    let sink = MemorySink::default();
    let mut session = session_with(&sink);
    session.start();

    drag(&mut session, 200.0);

    assert_eq!(sink.recorded(), ["1"]);
    assert_eq!(sink.feedback_log(), [Feedback::Grab, Feedback::Success]);
    assert_eq!(session.state().queue.position(), 1);
    assert_eq!(
        session.state().compute_viewmodel().header.subtitle,
        "2 of 10 jobs"
    );
}

#[test]
fn release_at_exact_threshold_snaps_back() {
    let sink = MemorySink::default();
    let mut session = session_with(&sink);
    session.start();

    drag(&mut session, 120.0);
    drag(&mut session, -120.0);

    assert_eq!(session.state().queue.position(), 0);
    assert!(sink.recorded().is_empty());
    assert!(session.state().engine.phase().is_idle());
}

#[test]
fn cancel_never_commits() {
    let sink = MemorySink::default();
    let mut session = session_with(&sink);
    session.start();

    session.dispatch(Event::PointerDown { x: 0.0, y: 0.0 });
    session.dispatch(Event::PointerMove { x: 300.0, y: 0.0 });
    session.dispatch(Event::PointerCancel);

    assert_eq!(session.state().queue.position(), 0);
    assert!(sink.recorded().is_empty());
}

#[test]
fn sink_failure_does_not_roll_back() {
    let sink = MemorySink::default();
    sink.set_failing(true);
    let mut session = session_with(&sink);
    session.start();

    session.dispatch(Event::ForceSwipe(Decision::Apply));

    assert!(sink.recorded().is_empty());
    assert_eq!(session.state().queue.position(), 1);
    assert!(session.state().queue.applied_ids().contains("1"));
    assert_eq!(session.state().applications.len(), 1);
}

#[test]
fn whole_deck_then_refresh() {
    let sink = MemorySink::default();
    let mut session = session_with(&sink);
    session.start();

    for i in 0..10 {
        let decision = if i % 2 == 0 { Decision::Apply } else { Decision::Pass };
        session.dispatch(Event::ForceSwipe(decision));
    }

    let vm = session.state().compute_viewmodel();
    assert!(vm.card.is_none());
    assert_eq!(vm.empty_state.map(|e| e.message).as_deref(), Some("No More Jobs!"));
    assert_eq!(sink.recorded(), ["1", "3", "5", "7", "9"]);

    let stats = session.state().profile_stats();
    assert_eq!((stats.applied, stats.passed, stats.remaining), (5, 5, 0));

    session.dispatch(Event::ForceSwipe(Decision::Apply));
    assert_eq!(sink.recorded().len(), 5);

    session.dispatch(Event::Refresh);
    assert_eq!(session.state().queue.position(), 0);
    assert!(session.state().queue.applied_ids().is_empty());
    assert_eq!(session.state().applications.len(), 5);
}

#[test]
fn reload_during_exit_animation_discards_decision() {
    let sink = MemorySink::default();
    let mut session = Session::new(AppState::default(), Box::new(MockCatalog))
        .with_application_sink(Box::new(sink.clone()));
    session.start();

    session.dispatch(Event::ForceSwipe(Decision::Apply));
    let animations = session.take_animations();
    assert_eq!(animations.len(), 1);

    let postings = vec![JobPosting::new("99", "Platform Engineer", "Acme", "Remote")];
    session.dispatch(Event::JobsLoaded { postings });
    session.dispatch(Event::AnimationFinished { id: animations[0].id });

    assert!(sink.recorded().is_empty());
    assert_eq!(session.state().queue.position(), 0);
    assert!(session.state().engine.phase().is_idle());
}

#[test]
fn button_press_mid_drag_throws_card() {
    let sink = MemorySink::default();
    let mut session = session_with(&sink);
    session.start();

    session.dispatch(Event::PointerDown { x: 0.0, y: 0.0 });
    session.dispatch(Event::PointerMove { x: 40.0, y: 0.0 });
    session.dispatch(Event::ForceSwipe(Decision::Pass));
    session.dispatch(Event::PointerUp);

    assert_eq!(session.state().queue.position(), 1);
    assert!(sink.recorded().is_empty());
    assert_eq!(
        sink.feedback_log(),
        [Feedback::Grab, Feedback::Light]
    );
}
