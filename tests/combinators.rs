use std::cell::Cell;

use optional::Optional;

fn guarded_div(x: i32) -> Optional<i32> {
    if x == 0 {
        return Optional::empty();
    }
    Optional::holding(10 / x)
}

#[test]
fn map_applies_to_held_value() {
    let i = Optional::holding(1);
    let m = |i: i32| i + 1;
    assert_eq!(i.map(m).must_get(), &m(*i.must_get()));
    assert_eq!(i.map(m), Optional::holding(2));
}

#[test]
fn map_skips_empty() {
    let called = Cell::new(false);
    let o: Optional<i32> = Optional::empty();
    let mapped = o.map(|x| {
        called.set(true);
        x + 1
    });
    assert!(mapped.is_empty());
    assert!(!called.get(), "f must not run on an empty container");
}

#[test]
fn map_changes_value_type() {
    let len = Optional::holding("four".to_string()).map(|s| s.len());
    assert_eq!(len, Optional::holding(4usize));
}

#[test]
fn flat_map_can_introduce_absence() {
    let zero = Optional::holding(0);
    assert!(zero.flat_map(guarded_div).try_get().is_err(), "division by zero yields empty");
    assert_eq!(Optional::holding(5).flat_map(guarded_div), Optional::holding(2));
}

#[test]
fn flat_map_skips_empty() {
    let called = Cell::new(false);
    let o: Optional<i32> = Optional::empty();
    let result = o.flat_map(|x| {
        called.set(true);
        guarded_div(x)
    });
    assert!(result.is_empty());
    assert!(!called.get());
}

#[test]
fn chains_stop_at_first_absence() {
    let result = Optional::holding(2)
        .flat_map(guarded_div) // 5
        .map(|x| x - 5) // 0
        .flat_map(guarded_div) // empty
        .map(|x| x * 100);
    assert!(result.is_empty());
}

#[test]
fn as_ref_maps_without_consuming() {
    let name = Optional::holding("Alice".to_string());
    let len = name.as_ref().map(|s| s.len());
    assert_eq!(len, Optional::holding(5));
    assert_eq!(name.must_get(), "Alice", "original container is untouched");
}

#[test]
fn as_mut_maps_in_place() {
    let mut o = Optional::holding(1);
    o.as_mut().map(|x| *x += 1);
    assert_eq!(o, Optional::holding(2));
}

#[test]
fn try_map_propagates_failure() {
    let parsed: Result<Optional<i32>, _> = Optional::holding("12").try_map(str::parse::<i32>);
    assert_eq!(parsed, Ok(Optional::holding(12)));

    let failed = Optional::holding("twelve").try_map(str::parse::<i32>);
    assert!(failed.is_err(), "error from f reaches the caller");

    let empty: Optional<&str> = Optional::empty();
    assert_eq!(empty.try_map(str::parse::<i32>), Ok(Optional::Empty));
}
