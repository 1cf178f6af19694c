use super::*;

fn recorder() -> (Rc<RefCell<Vec<MenuSignal>>>, Callback<MenuSignal>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, Callback::from(move |signal| sink.borrow_mut().push(signal)))
}

#[test]
fn dispatch_reaches_live_subscribers() {
    let bus = MenuBus::new();
    let (seen, observer) = recorder();
    let _subscription = bus.subscribe(observer);

    assert_eq!(bus.dispatch(MenuSignal::Open), 1);
    assert_eq!(*seen.borrow(), vec![MenuSignal::Open]);
}

#[test]
fn dropped_subscription_stops_delivery() {
    let bus = MenuBus::new();
    let (seen, observer) = recorder();
    let subscription = bus.subscribe(observer);
    drop(subscription);

    assert_eq!(bus.observer_count(), 0);
    assert_eq!(bus.dispatch(MenuSignal::Open), 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn only_the_dropped_observer_is_removed() {
    let bus = MenuBus::new();
    let (first_seen, first) = recorder();
    let (second_seen, second) = recorder();
    let first_sub = bus.subscribe(first);
    let _second_sub = bus.subscribe(second);

    drop(first_sub);
    bus.dispatch(MenuSignal::Close);

    assert!(first_seen.borrow().is_empty());
    assert_eq!(*second_seen.borrow(), vec![MenuSignal::Close]);
}

#[test]
fn clones_share_observers() {
    let bus = MenuBus::new();
    let handle = bus.clone();
    assert!(bus == handle);
    assert!(bus != MenuBus::new());

    let (seen, observer) = recorder();
    let _subscription = bus.subscribe(observer);
    handle.dispatch(MenuSignal::Open);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn subscription_outliving_bus_is_harmless() {
    let bus = MenuBus::new();
    let (_, observer) = recorder();
    let subscription = bus.subscribe(observer);
    drop(bus);
    drop(subscription);
}
