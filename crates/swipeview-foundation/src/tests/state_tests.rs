use super::*;

#[test]
fn set_notifies_only_on_change() {
    let state = MutableState::new(0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _subscription = {
        let seen = Rc::clone(&seen);
        state.subscribe(move |value| seen.borrow_mut().push(*value))
    };

    assert!(state.set(1));
    assert!(!state.set(1));
    assert!(state.set(2));

    assert_eq!(*seen.borrow(), vec![1, 2]);
    assert_eq!(state.get(), 2);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let state = MutableState::new(None::<u64>);
    let calls = Rc::new(Cell::new(0));
    let subscription = {
        let calls = Rc::clone(&calls);
        state.subscribe(move |_| calls.set(calls.get() + 1))
    };
    assert_eq!(state.observer_count(), 1);

    state.set(Some(1));
    drop(subscription);
    state.set(Some(2));

    assert_eq!(calls.get(), 1);
    assert_eq!(state.observer_count(), 0);
}

#[test]
fn cancel_unsubscribes() {
    let state = MutableState::new(false);
    let subscription = state.subscribe(|_| {});
    subscription.cancel();
    assert_eq!(state.observer_count(), 0);
}

#[test]
fn observers_can_read_and_write_other_cells() {
    let source = MutableState::new(0);
    let mirror = MutableState::new(0);
    let _subscription = {
        let source_handle = source.clone();
        let mirror = mirror.clone();
        source.subscribe(move |value| {
            assert_eq!(source_handle.get(), *value);
            mirror.set(*value * 10);
        })
    };

    source.set(4);
    assert_eq!(mirror.get(), 40);
}

#[test]
fn observer_may_unsubscribe_itself_during_notification() {
    let state = MutableState::new(0);
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(Cell::new(0));
    let subscription = {
        let slot = Rc::clone(&slot);
        let calls = Rc::clone(&calls);
        state.subscribe(move |_| {
            calls.set(calls.get() + 1);
            slot.borrow_mut().take();
        })
    };
    slot.borrow_mut().replace(subscription);

    state.set(1);
    state.set(2);
    assert_eq!(calls.get(), 1);
}

#[test]
fn subscription_outliving_state_is_harmless() {
    let subscription = {
        let state = MutableState::new(1);
        state.subscribe(|_| {})
    };
    drop(subscription);
}
