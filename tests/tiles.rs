//! Validates edge matching, direction algebra, and domain-set operations

use wavetile::algorithm::domain::DomainSet;
use wavetile::spatial::tiles::{Direction, MatchRule, Tile, edges_match};

fn sample_tiles() -> Vec<Tile> {
    vec![
        Tile::new(0, ["AAA", "AAA", "AAA", "AAA"]),
        Tile::new(1, ["BBB", "AAA", "BBB", "AAA"]),
        Tile::new(2, ["AAA", "AAA", "BBB", "AAA"]),
        Tile::new(3, ["ABC", "CBA", "XYZ", "ZYX"]),
    ]
}

#[test]
fn test_opposite_is_an_involution() {
    for direction in Direction::ALL {
        assert_eq!(direction.opposite().opposite(), direction);
        assert_ne!(direction.opposite(), direction);
    }
}

#[test]
fn test_opposite_matches_cyclic_ordering() {
    assert_eq!(Direction::Left.opposite(), Direction::Right);
    assert_eq!(Direction::Up.opposite(), Direction::Down);
    assert_eq!(Direction::Left.index(), 0);
    assert_eq!(Direction::Down.index(), 3);
}

#[test]
fn test_match_symmetry_under_both_rules() {
    let tiles = sample_tiles();

    for rule in [MatchRule::Exact, MatchRule::Reversed] {
        for a in &tiles {
            for b in &tiles {
                for direction in Direction::ALL {
                    assert_eq!(
                        edges_match(rule, direction, a, b),
                        edges_match(rule, direction.opposite(), b, a),
                        "asymmetry for rule {rule:?} direction {direction:?} tiles {} and {}",
                        a.id(),
                        b.id(),
                    );
                }
            }
        }
    }
}

#[test]
fn test_exact_rule_requires_identical_signatures() {
    let tiles = sample_tiles();
    let uniform = &tiles[0];
    let striped = &tiles[1];

    // uniform's right edge "AAA" faces striped's left edge "BBB"
    assert!(!edges_match(
        MatchRule::Exact,
        Direction::Right,
        uniform,
        striped
    ));
    // vertically both read "AAA"
    assert!(edges_match(
        MatchRule::Exact,
        Direction::Down,
        uniform,
        striped
    ));
}

#[test]
fn test_reversed_rule_compares_against_reversed_signature() {
    // a's right edge "XYZ" faces b's left edge; under the reversed rule the
    // neighbour must carry the opposite reading "ZYX"
    let a = Tile::new(0, ["---", "---", "XYZ", "---"]);
    let b = Tile::new(1, ["ZYX", "---", "---", "---"]);

    assert!(edges_match(MatchRule::Reversed, Direction::Right, &a, &b));
    assert!(!edges_match(MatchRule::Exact, Direction::Right, &a, &b));

    // palindromic signatures behave identically under both rules
    let c = Tile::new(2, ["ABA", "ABA", "ABA", "ABA"]);
    assert!(edges_match(MatchRule::Reversed, Direction::Up, &c, &c));
    assert!(edges_match(MatchRule::Exact, Direction::Up, &c, &c));
}

#[test]
fn test_domain_set_intersection() {
    let mut first = DomainSet::empty(10);
    first.insert(1);
    first.insert(3);
    first.insert(5);

    let mut second = DomainSet::empty(10);
    second.insert(3);
    second.insert(5);
    second.insert(7);

    let intersection = first.intersection(&second);
    assert_eq!(intersection.to_vec(), vec![3, 5]);
    assert!(!intersection.is_empty());
    assert_eq!(intersection.len(), 2);
}

#[test]
fn test_domain_set_empty_intersection() {
    let mut first = DomainSet::empty(10);
    first.insert(1);
    first.insert(2);

    let mut second = DomainSet::empty(10);
    second.insert(3);
    second.insert(4);

    let intersection = first.intersection(&second);
    assert!(intersection.is_empty());
    assert_eq!(intersection.len(), 0);
    assert_eq!(intersection.to_vec(), Vec::<usize>::new());
}

#[test]
fn test_domain_set_full_singleton_and_removal() {
    let full = DomainSet::full(4);
    assert_eq!(full.len(), 4);
    assert_eq!(full.to_vec(), vec![0, 1, 2, 3]);

    let single = DomainSet::singleton(2, 4);
    assert_eq!(single.to_vec(), vec![2]);
    assert!(single.contains(2));
    assert!(!single.contains(1));

    let mut shrinking = full.clone();
    shrinking.remove(1);
    assert_eq!(shrinking.to_vec(), vec![0, 2, 3]);
    // nth maps a draw in 0..len onto the remaining canonical order
    assert_eq!(shrinking.nth(1), Some(2));
    assert_eq!(shrinking.nth(3), None);
}

#[test]
fn test_domain_set_out_of_range_indices_are_ignored() {
    let mut domain = DomainSet::empty(3);
    domain.insert(9);
    assert!(domain.is_empty());
    assert!(!domain.contains(9));

    domain.insert(1);
    domain.remove(9);
    assert_eq!(domain.to_vec(), vec![1]);
}
