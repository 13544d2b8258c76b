use portfolio_core::config::TypewriterConfig;
use portfolio_core::{TimerRequest, Typewriter};

fn writer() -> Typewriter {
    Typewriter::new(&TypewriterConfig {
        tick_ms: 100,
        hold_ms: 2_000,
        phrases: vec!["Web".to_string(), "UI".to_string()],
    })
    .expect("phrases are configured")
}

fn fire(writer: &mut Typewriter, request: TimerRequest) -> TimerRequest {
    writer.on_timer(request.token).expect("token should be live")
}

#[test]
fn types_holds_and_advances_through_phrases() {
    let mut writer = writer();
    let mut request = writer.start();
    assert_eq!(request.delay_ms, 100);

    let mut frames = Vec::new();
    for _ in 0..4 {
        request = fire(&mut writer, request);
        frames.push(writer.displayed().to_string());
    }
    assert_eq!(frames, vec!["", "W", "We", "Web"]);
    assert_eq!(request.delay_ms, 100);

    request = fire(&mut writer, request);
    assert_eq!(request.delay_ms, 2_000);
    assert_eq!(writer.displayed(), "Web");
    assert_eq!(writer.phrase_index(), 0);

    request = fire(&mut writer, request);
    assert_eq!(request.delay_ms, 100);
    assert_eq!(writer.phrase_index(), 1);
    assert_eq!(writer.current_phrase(), "UI");
    assert_eq!(writer.displayed(), "");

    for _ in 0..3 {
        request = fire(&mut writer, request);
    }
    assert_eq!(writer.displayed(), "UI");
}

#[test]
fn phrase_index_wraps_after_last_phrase() {
    let mut writer = writer();
    let mut request = writer.start();

    // "Web": 4 ticks then hold, "UI": 3 ticks then hold.
    for _ in 0..(4 + 1 + 1) + (3 + 1 + 1) {
        request = fire(&mut writer, request);
    }
    assert_eq!(writer.phrase_index(), 0);
    assert_eq!(writer.current_phrase(), "Web");
    assert_eq!(request.delay_ms, 100);
}

#[test]
fn displayed_text_is_always_prefix_of_current_phrase() {
    let mut writer = writer();
    let mut request = writer.start();
    for _ in 0..40 {
        request = fire(&mut writer, request);
        assert!(
            writer.current_phrase().starts_with(writer.displayed()),
            "`{}` is not a prefix of `{}`",
            writer.displayed(),
            writer.current_phrase()
        );
    }
}

#[test]
fn cancel_invalidates_live_timer() {
    let mut writer = writer();
    let request = writer.start();
    assert_eq!(writer.cancel(), Some(request.token));
    assert_eq!(writer.live_timer(), None);
    assert_eq!(writer.on_timer(request.token), None);
    assert_eq!(writer.cancel(), None);
}
