use errands::core::hitting_set::min_hitting_set;

/// Exhaustive reference: smallest subset of `universe` (by bitmask
/// enumeration) intersecting every family. Only usable for small
/// universes, which is the point.
fn oracle_min_size(universe: &[&str], families: &[Vec<String>]) -> usize {
    assert!(universe.len() <= 8);
    let mut best = usize::MAX;
    for mask in 0u32..(1 << universe.len()) {
        let subset: Vec<&str> = universe
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, s)| *s)
            .collect();
        let hits_all = families
            .iter()
            .all(|family| family.iter().any(|s| subset.contains(&s.as_str())));
        if hits_all {
            best = best.min(subset.len());
        }
    }
    best
}

fn hits_all(result: &[String], families: &[Vec<String>]) -> bool {
    families
        .iter()
        .all(|family| family.iter().any(|s| result.contains(s)))
}

/// Tiny deterministic generator so the case set is stable across runs.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

#[test]
fn test_solver_matches_brute_force_oracle() {
    let universe: Vec<&str> = vec!["A", "B", "C", "D", "E", "F", "G", "H"];
    let mut rng = Lcg(42);

    for case in 0..200 {
        let universe_size = 3 + rng.next(6); // 3..=8
        let stores = &universe[..universe_size];
        let family_count = 1 + rng.next(6); // 1..=6

        let mut families: Vec<Vec<String>> = Vec::new();
        for _ in 0..family_count {
            let size = 1 + rng.next(universe_size);
            let mut family: Vec<String> = Vec::new();
            while family.len() < size {
                let pick = stores[rng.next(universe_size)].to_string();
                if !family.contains(&pick) {
                    family.push(pick);
                }
            }
            families.push(family);
        }

        let requirements: Vec<(&str, &[String])> = families
            .iter()
            .enumerate()
            .map(|(i, f)| (universe[i % universe.len()], f.as_slice()))
            .collect();

        let result = min_hitting_set(&requirements, None)
            .unwrap_or_else(|e| panic!("case {} unexpectedly failed: {}", case, e));

        assert!(
            hits_all(&result, &families),
            "case {}: result {:?} misses a family in {:?}",
            case,
            result,
            families
        );
        assert_eq!(
            result.len(),
            oracle_min_size(stores, &families),
            "case {}: result {:?} not minimal for {:?}",
            case,
            result,
            families
        );

        // Determinism: identical input, identical output.
        let again = min_hitting_set(&requirements, None).unwrap();
        assert_eq!(result, again, "case {}: nondeterministic result", case);
    }
}

#[test]
fn test_solver_handles_overlapping_chain() {
    // {A,B}, {B,C}, {C,D}: B and C together hit everything, and no single
    // store does.
    let f1 = vec!["A".to_string(), "B".to_string()];
    let f2 = vec!["B".to_string(), "C".to_string()];
    let f3 = vec!["C".to_string(), "D".to_string()];
    let reqs: Vec<(&str, &[String])> = vec![("x", &f1), ("y", &f2), ("z", &f3)];

    let result = min_hitting_set(&reqs, None).unwrap();
    assert_eq!(result.len(), 2);
    assert!(hits_all(&result, &[f1, f2, f3]));
}
