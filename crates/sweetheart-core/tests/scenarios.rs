//! End-to-end page scenarios
//!
//! Each test wires widgets together the way the page does and checks the
//! visible outcome through in-memory elements.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::DateTime;
use sweetheart_core::reveal::{FLIPPED, OPEN};
use sweetheart_core::{
    flip_card, BurstConfig, BurstSink, CounterPhase, ElapsedReading, ElementState, EnvelopeClick,
    FrameStep, Modal, PageConfig, PageResult, PageSession, RampTask, Rect, ReferenceInstant,
    RenderTarget, Viewport,
};

#[derive(Clone, Default)]
struct Confetti(Rc<RefCell<Vec<BurstConfig>>>);

impl BurstSink for Confetti {
    fn burst(&mut self, config: &BurstConfig) -> PageResult<()> {
        self.0.borrow_mut().push(config.clone());
        Ok(())
    }
}

fn session() -> PageSession {
    let at = DateTime::parse_from_rfc3339("2025-04-13T00:00:00+00:00").unwrap();
    PageSession::with_reference(PageConfig::default(), ReferenceInstant::new(at))
}

fn epoch_ms(rfc3339: &str) -> i64 {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().timestamp_millis()
}

// ============================================================================
// Time together
// ============================================================================

#[test]
fn test_elapsed_one_day_one_hour() {
    let session = session();
    let now = epoch_ms("2025-04-14T01:02:03+00:00");

    let reading = session.counter().refresh(now);
    assert_eq!(
        reading,
        ElapsedReading {
            hours: 25,
            minutes: 2,
            seconds: 3
        }
    );

    let mut hours = ElementState::new();
    let mut minutes = ElementState::new();
    let mut seconds = ElementState::new();
    reading.render(&mut hours, &mut minutes, &mut seconds);
    assert_eq!(
        (hours.text(), minutes.text(), seconds.text()),
        ("25".to_string(), "2".to_string(), "3".to_string())
    );
}

#[test]
fn test_counter_ramp_then_steady() {
    let mut session = session();
    let wall = epoch_ms("2025-06-01T00:00:00+00:00");
    let counter = session.begin_ramp().unwrap();

    let shown = Rc::new(RefCell::new(Vec::new()));
    let sink = shown.clone();
    let mut task = RampTask::new(counter, || wall, move |r| sink.borrow_mut().push(r));
    task.run_frames((0..).map(|i| 100.0 + i as f64 * 16.0));
    session.finish_ramp(task.into_counter());

    assert_eq!(session.counter().phase(), CounterPhase::Steady);
    let shown = shown.borrow();
    let exact = session.counter().refresh(wall);
    assert_eq!(shown[0], ElapsedReading::default());
    // Hours never decrease during the ramp and stay below the target
    assert!(shown.windows(2).all(|w| w[0].hours <= w[1].hours));
    assert!(shown.iter().all(|r| r.hours <= exact.hours));
}

// ============================================================================
// Envelope
// ============================================================================

#[test]
fn test_inner_card_click_before_open_does_nothing() {
    let session = session();
    let mut inner = ElementState::new().with_class("card-content");

    assert!(!session.envelope().flip_inner(&mut inner));
    assert!(!inner.has_class(FLIPPED));
}

#[test]
fn test_envelope_open_celebrates_once() {
    let mut session = session();
    let confetti = Confetti::default();
    let mut outer = ElementState::new();
    let mut label = ElementState::with_text("Tap to open");

    let mut opened = 0;
    for _ in 0..3 {
        if session.envelope_mut().open(&mut outer, Some(&mut label)) == EnvelopeClick::Opened {
            opened += 1;
            let mut task = session.celebration().start(confetti.clone(), 0.0).unwrap();
            task.run_frames([0.0, 1_000.0, 3_000.0]);
        }
    }

    assert_eq!(opened, 1);
    assert!(outer.has_class(OPEN));
    // Opening burst plus three frames of left/right pairs
    assert_eq!(confetti.0.borrow().len(), 7);

    let mut inner = ElementState::new();
    assert!(session.envelope().flip_inner(&mut inner));
    assert!(inner.has_class(FLIPPED));
}

// ============================================================================
// Gallery
// ============================================================================

#[test]
fn test_gallery_item_two_clicks_restore() {
    let mut items: Vec<ElementState> = (0..4).map(|_| ElementState::new()).collect();

    flip_card(&mut items[1]);
    assert!(items[1].has_class(FLIPPED));
    assert!(!items[0].has_class(FLIPPED));

    flip_card(&mut items[1]);
    assert_eq!(items[1], ElementState::new());
}

// ============================================================================
// Yes / No
// ============================================================================

#[test]
fn test_yes_shows_modal_and_close_resets_no_button() {
    let session = session();
    let confetti = Confetti::default();
    let mut modal = ElementState::new();
    let mut no_button = ElementState::with_text("No");
    no_button.set_bounding_box(Rect::new(400.0, 300.0, 90.0, 44.0));

    let mut rng = rand::rng();
    session
        .evader()
        .evade(&mut no_button, Viewport::new(1024.0, 768.0), &mut rng)
        .unwrap();
    assert_eq!(no_button.style("position").as_deref(), Some("fixed"));

    session.celebration().start(confetti.clone(), 0.0).unwrap();
    Modal::show(&mut modal);
    assert!(Modal::is_visible(&modal));
    assert_eq!(confetti.0.borrow()[0].particle_count, 150);

    Modal::hide(&mut modal);
    session.evader().reset(&mut no_button);
    assert!(!Modal::is_visible(&modal));
    assert_eq!(no_button.style("position").as_deref(), Some("static"));
}
