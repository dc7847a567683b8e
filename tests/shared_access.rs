use std::thread;

use optional::{OptionalError, SharedOptional};

#[test]
fn clones_share_one_slot() {
    let shared: SharedOptional<i32> = SharedOptional::new();
    let other = shared.clone();
    assert!(!shared.is_present().expect("lock"));
    other.assign(9).expect("lock");
    assert_eq!(shared.get_cloned().expect("present"), 9);
    shared.reset().expect("lock");
    assert!(!other.is_present().expect("lock"));
}

#[test]
fn absent_value_is_reported() {
    let shared: SharedOptional<String> = SharedOptional::default();
    let res = shared.get_cloned();
    assert!(matches!(res, Err(OptionalError::Absent(_))), "got {res:?}");
}

#[test]
fn take_leaves_slot_empty() {
    let shared = SharedOptional::holding("x".to_string());
    let taken = shared.take().expect("lock");
    assert_eq!(taken.must_get(), "x");
    assert!(!shared.is_present().expect("lock"));
}

#[test]
fn concurrent_updates_through_with() {
    let shared = SharedOptional::holding(0u64);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let s = shared.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    s.with(|o| {
                        if let Ok(v) = o.try_get_mut() {
                            *v += 1;
                        }
                    })
                    .expect("lock");
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker");
    }
    assert_eq!(shared.get_cloned().expect("present"), 800);
}

#[test]
fn poisoned_lock_surfaces_as_error() {
    let shared = SharedOptional::holding(1);
    let s = shared.clone();
    let _ = thread::spawn(move || {
        let _: optional::Result<()> = s.with(|_| panic!("poison"));
    })
    .join();
    assert!(matches!(shared.is_present(), Err(OptionalError::Lock(_))));
}
