use super::*;

fn speeds() -> TypingSpeeds {
    TypingSpeeds {
        typing_ms: 80,
        deleting_ms: 60,
        pause_ms: 2200,
        variable: None,
    }
}

fn run_until_typed(writer: &mut Typewriter) -> Vec<TypeEvent> {
    let mut events = Vec::new();
    loop {
        let event = writer.step();
        events.push(event);
        if matches!(event, TypeEvent::SentenceTyped(_) | TypeEvent::Finished) {
            return events;
        }
    }
}

#[test]
fn reports_sentence_once_fully_visible() {
    let mut writer = Typewriter::new(vec!["Hey".to_string(), "Yo".to_string()], true);
    let events = run_until_typed(&mut writer);
    assert_eq!(
        events,
        vec![TypeEvent::Typed, TypeEvent::Typed, TypeEvent::SentenceTyped(0)]
    );
    assert_eq!(writer.visible(), "Hey");
    assert_eq!(writer.phase(), TypePhase::Pausing);
}

#[test]
fn deletes_then_moves_to_next_sentence() {
    let mut writer = Typewriter::new(vec!["Hey".to_string(), "Yo".to_string()], true);
    run_until_typed(&mut writer);
    assert_eq!(writer.step(), TypeEvent::Paused);
    for _ in 0..3 {
        assert_eq!(writer.step(), TypeEvent::Deleted);
    }
    assert_eq!(writer.index(), 1);
    assert_eq!(writer.visible(), "");

    let events = run_until_typed(&mut writer);
    assert_eq!(events.last(), Some(&TypeEvent::SentenceTyped(1)));
    assert_eq!(writer.visible(), "Yo");
}

#[test]
fn loops_back_to_first_sentence() {
    let mut writer = Typewriter::new(vec!["a".to_string(), "b".to_string()], true);
    for _ in 0..2 {
        run_until_typed(&mut writer);
        writer.step();
        writer.step();
    }
    assert_eq!(writer.index(), 0);
    assert_eq!(writer.phase(), TypePhase::Typing);
}

#[test]
fn stops_after_last_sentence_without_loop() {
    let mut writer = Typewriter::new(vec!["ok".to_string()], false);
    run_until_typed(&mut writer);
    assert_eq!(writer.step(), TypeEvent::Finished);
    assert_eq!(writer.visible(), "ok");
    assert_eq!(writer.delay_ms(&speeds(), 0.3), None);
}

#[test]
fn counts_characters_not_bytes() {
    let mut writer = Typewriter::new(vec!["héllo".to_string()], false);
    writer.step();
    writer.step();
    assert_eq!(writer.visible(), "hé");
}

#[test]
fn delays_follow_phase() {
    let mut writer = Typewriter::new(vec!["ab".to_string()], true);
    assert_eq!(writer.delay_ms(&speeds(), 0.9), Some(80));

    let variable = TypingSpeeds {
        variable: Some(SpeedRange { min_ms: 60, max_ms: 100 }),
        ..speeds()
    };
    assert_eq!(writer.delay_ms(&variable, 0.0), Some(60));
    assert_eq!(writer.delay_ms(&variable, 0.5), Some(80));

    run_until_typed(&mut writer);
    assert_eq!(writer.delay_ms(&speeds(), 0.0), Some(2200));
    writer.step();
    assert_eq!(writer.delay_ms(&speeds(), 0.0), Some(60));
}

#[test]
fn empty_text_is_finished() {
    let writer = Typewriter::new(Vec::new(), true);
    assert_eq!(writer.phase(), TypePhase::Finished);
    assert_eq!(writer.visible(), "");
}
