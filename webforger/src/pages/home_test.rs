use super::*;

#[test]
fn first_sentence_never_opens_menu() {
    let mut trigger = OnceTrigger::default();
    assert!(!trigger.on_sentence_typed(0));
    assert!(!trigger.on_sentence_typed(0));
}

#[test]
fn second_sentence_opens_menu_once() {
    let mut trigger = OnceTrigger::default();
    assert!(!trigger.on_sentence_typed(0));
    assert!(trigger.on_sentence_typed(1));
    // The intro loops back around.
    assert!(!trigger.on_sentence_typed(0));
    assert!(!trigger.on_sentence_typed(1));
}
