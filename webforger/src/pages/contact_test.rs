use super::*;

#[test]
fn title_holds_then_leaves_then_stops() {
    assert_eq!(Intro::Holding.next(), Some((2000, Intro::Leaving)));
    assert_eq!(Intro::Leaving.next(), Some((1000, Intro::Done)));
    assert_eq!(Intro::Done.next(), None);
}
