use crate::MaximaMap;

fn pairs(iter: crate::iter::Iter<'_, i32, i32>) -> Vec<(i32, i32)> {
    iter.map(|p| (*p.argument(), *p.value())).collect()
}

#[test]
fn single_point_is_a_maximum() {
    let mut map = MaximaMap::new();
    map.set_value(5, 1).unwrap();
    assert_eq!(pairs(map.maxima()), vec![(5, 1)]);
}

#[test]
fn plateau_is_entirely_included() {
    let mut map = MaximaMap::new();
    map.set_value(1, 5).unwrap();
    map.set_value(2, 5).unwrap();
    map.set_value(3, 5).unwrap();
    // Equal values, so ties break by ascending argument.
    assert_eq!(pairs(map.maxima()), vec![(1, 5), (2, 5), (3, 5)]);
}

#[test]
fn single_peak() {
    let mut map = MaximaMap::new();
    map.set_value(1, 1).unwrap();
    map.set_value(2, 3).unwrap();
    map.set_value(3, 2).unwrap();
    assert_eq!(pairs(map.maxima()), vec![(2, 3)]);
}

#[test]
fn erase_peak_promotes_higher_boundary_only() {
    let mut map = MaximaMap::new();
    map.set_value(1, 1).unwrap();
    map.set_value(2, 3).unwrap();
    map.set_value(3, 2).unwrap();
    map.erase(&2).unwrap();
    // Domain is now {(1,1),(3,2)}: point 3 dominates its one neighbor,
    // point 1 does not (1 < 2).
    assert_eq!(pairs(map.iter()), vec![(1, 1), (3, 2)]);
    assert_eq!(pairs(map.maxima()), vec![(3, 2)]);
}

#[test]
fn ascending_run_has_right_boundary_maximum() {
    let mut map = MaximaMap::new();
    for i in 1..=4 {
        map.set_value(i, i).unwrap();
    }
    assert_eq!(pairs(map.maxima()), vec![(4, 4)]);
}

#[test]
fn descending_run_has_left_boundary_maximum() {
    let mut map = MaximaMap::new();
    for i in 1..=4 {
        map.set_value(i, 10 - i).unwrap();
    }
    assert_eq!(pairs(map.maxima()), vec![(1, 9)]);
}

#[test]
fn maxima_ordered_by_value_desc_then_argument_asc() {
    let mut map = MaximaMap::new();
    for (a, v) in [(1, 10), (2, 1), (3, 7), (4, 1), (5, 9)] {
        map.set_value(a, v).unwrap();
    }
    assert_eq!(pairs(map.maxima()), vec![(1, 10), (5, 9), (3, 7)]);
}

#[test]
fn update_moves_the_peak() {
    let mut map = MaximaMap::new();
    map.set_value(1, 5).unwrap();
    map.set_value(2, 3).unwrap();
    map.set_value(3, 1).unwrap();
    assert_eq!(pairs(map.maxima()), vec![(1, 5)]);

    map.set_value(2, 7).unwrap();
    assert_eq!(pairs(map.maxima()), vec![(2, 7)]);

    map.set_value(2, 5).unwrap();
    // Tie with the left neighbor: both qualify.
    assert_eq!(pairs(map.maxima()), vec![(1, 5), (2, 5)]);
}

#[test]
fn lowering_a_valley_restores_neighbors() {
    let mut map = MaximaMap::new();
    map.set_value(1, 4).unwrap();
    map.set_value(2, 9).unwrap();
    map.set_value(3, 4).unwrap();
    assert_eq!(pairs(map.maxima()), vec![(2, 9)]);

    map.set_value(2, 0).unwrap();
    assert_eq!(pairs(map.maxima()), vec![(1, 4), (3, 4)]);
}

#[test]
fn erase_middle_of_plateau_keeps_the_rest() {
    let mut map = MaximaMap::new();
    map.set_value(1, 5).unwrap();
    map.set_value(2, 5).unwrap();
    map.set_value(3, 5).unwrap();
    map.erase(&2).unwrap();
    assert_eq!(pairs(map.maxima()), vec![(1, 5), (3, 5)]);
}

#[test]
fn equal_value_set_is_idempotent() {
    let mut map = MaximaMap::new();
    map.set_value(1, 2).unwrap();
    map.set_value(2, 8).unwrap();
    map.set_value(3, 4).unwrap();

    map.set_value(2, 8).unwrap();
    let domain_before = pairs(map.iter());
    let maxima_before = pairs(map.maxima());

    map.set_value(2, 8).unwrap();
    assert_eq!(pairs(map.iter()), domain_before);
    assert_eq!(pairs(map.maxima()), maxima_before);
}

#[test]
fn insert_between_points_reevaluates_both_neighbors() {
    let mut map = MaximaMap::new();
    map.set_value(1, 3).unwrap();
    map.set_value(3, 3).unwrap();
    assert_eq!(pairs(map.maxima()), vec![(1, 3), (3, 3)]);

    // A taller middle point demotes both.
    map.set_value(2, 5).unwrap();
    assert_eq!(pairs(map.maxima()), vec![(2, 5)]);

    // Erasing it restores them.
    map.erase(&2).unwrap();
    assert_eq!(pairs(map.maxima()), vec![(1, 3), (3, 3)]);
}
