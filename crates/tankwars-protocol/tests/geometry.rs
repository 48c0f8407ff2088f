use proptest::prelude::*;
use tankwars_protocol::{Coord, Direction};

fn coord() -> impl Strategy<Value = Coord> {
    (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| Coord::new(x, y))
}

proptest! {
    #[test]
    fn six_distinct_neighbors_at_distance_one(c in coord()) {
        let neighbors = c.neighbors();
        for (i, a) in neighbors.iter().enumerate() {
            prop_assert_eq!(c.distance(*a), 1);
            prop_assert_ne!(*a, c);
            for b in &neighbors[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn neighbor_relation_is_symmetric(c in coord()) {
        for n in c.neighbors() {
            prop_assert!(n.neighbors().contains(&c), "{} not adjacent back to {}", n, c);
        }
    }

    #[test]
    fn distance_is_a_metric(a in coord(), b in coord(), c in coord()) {
        prop_assert_eq!(a.distance(b), b.distance(a));
        prop_assert!(a.distance(c) <= a.distance(b) + b.distance(c));
        prop_assert_eq!(a.distance(b) == 0, a == b);
    }

    #[test]
    fn a_neighbor_step_changes_distance_by_at_most_one(a in coord(), b in coord()) {
        let d = a.distance(b);
        for n in a.neighbors() {
            prop_assert!((n.distance(b) - d).abs() <= 1);
        }
    }
}

#[test]
fn steps_match_neighbor_order() {
    let c = Coord::new(5, 3);
    let stepped: Vec<Coord> = Direction::ALL.iter().map(|d| c.step(*d)).collect();
    assert_eq!(stepped, c.neighbors().to_vec());
}

#[test]
fn opposite_directions_cancel() {
    let pairs = [
        (Direction::TopLeft, Direction::BottomRight),
        (Direction::TopRight, Direction::BottomLeft),
        (Direction::Right, Direction::Left),
    ];
    for y in 0..4 {
        let c = Coord::new(3, y);
        for (a, b) in pairs {
            assert_eq!(c.step(a).step(b), c);
            assert_eq!(c.step(b).step(a), c);
        }
    }
}
