use std::collections::HashSet;

use achievement_randomiser_core::catalog::{all_objectives, all_unlocks};
use achievement_randomiser_core::{Achievements, RandomiserMode};
use proptest::prelude::*;

fn mode() -> impl Strategy<Value = RandomiserMode> {
    prop_oneof![
        Just(RandomiserMode::Standard),
        Just(RandomiserMode::Nightmare)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn generation_is_deterministic(seed in any::<u64>(), mode in mode()) {
        let a = Achievements::generate(seed, mode).unwrap();
        let b = Achievements::generate(seed, mode).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn generation_is_a_bijection(seed in any::<u64>(), mode in mode()) {
        let achievements = Achievements::generate(seed, mode).unwrap();
        let objectives: HashSet<_> = all_objectives(mode).into_iter().collect();
        let unlocks: HashSet<_> = all_unlocks(mode).into_iter().collect();

        let mut seen_objectives = HashSet::new();
        let mut seen_unlocks = HashSet::new();
        for (objective, unlock) in achievements.iter() {
            prop_assert!(seen_objectives.insert(objective));
            prop_assert!(seen_unlocks.insert(unlock));
        }
        prop_assert_eq!(seen_objectives, objectives);
        prop_assert_eq!(seen_unlocks, unlocks);
    }
}
