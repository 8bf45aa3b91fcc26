use super::*;
use std::collections::HashSet;

#[test]
fn test_adjacent_deltas() {
    let center = Location::new(4, 4);
    assert_eq!(center.adjacent(Direction::North), Location::new(3, 4));
    assert_eq!(center.adjacent(Direction::Northeast), Location::new(3, 5));
    assert_eq!(center.adjacent(Direction::East), Location::new(4, 5));
    assert_eq!(center.adjacent(Direction::Southeast), Location::new(5, 5));
    assert_eq!(center.adjacent(Direction::South), Location::new(5, 4));
    assert_eq!(center.adjacent(Direction::Southwest), Location::new(5, 3));
    assert_eq!(center.adjacent(Direction::West), Location::new(4, 3));
    assert_eq!(center.adjacent(Direction::Northwest), Location::new(3, 3));
}

#[test]
fn test_adjacent_does_not_bound_check() {
    // Locations are values; going off the grid is allowed here.
    assert_eq!(
        Location::new(0, 0).adjacent(Direction::Northwest),
        Location::new(-1, -1)
    );
}

#[test]
fn test_all_directions_are_distinct_steps() {
    let from = Location::new(4, 4);
    let steps: HashSet<Location> = Direction::ALL.iter().map(|&d| from.adjacent(d)).collect();
    assert_eq!(steps.len(), 8);
}

#[test]
fn test_value_equality_and_hashing() {
    let mut seen = HashSet::new();
    seen.insert(Location::new(2, 3));
    assert!(seen.contains(&Location::new(2, 3)));
    assert!(!seen.contains(&Location::new(3, 2)));
}

#[test]
fn test_display() {
    assert_eq!(Location::new(6, 0).to_string(), "(6, 0)");
}
