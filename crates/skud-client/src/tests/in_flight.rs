use crate::in_flight::InFlightGuard;

use std::sync::atomic::{AtomicBool, Ordering};

#[test]
fn given_free_flag_when_acquire_then_guard_held() {
    let flag = AtomicBool::new(false);

    let guard = InFlightGuard::try_acquire(&flag);

    assert!(guard.is_some());
    assert!(flag.load(Ordering::SeqCst));
}

#[test]
fn given_held_flag_when_acquire_again_then_none() {
    let flag = AtomicBool::new(false);
    let _first = InFlightGuard::try_acquire(&flag).unwrap();

    assert!(InFlightGuard::try_acquire(&flag).is_none());
}

#[test]
fn given_guard_when_dropped_then_flag_released() {
    let flag = AtomicBool::new(false);
    {
        let _guard = InFlightGuard::try_acquire(&flag).unwrap();
    }

    assert!(!flag.load(Ordering::SeqCst));
    assert!(InFlightGuard::try_acquire(&flag).is_some());
}
