//! 排序与查找的性质测试

use proptest::prelude::*;

use skilltrack::store::csv::{decode_line, encode_line};
use skilltrack::util::{binary_search_by, exact_by_year, merge_sort_by};
use skilltrack::{ProficiencyLevel, Skill};

fn years(values: &[i32]) -> Vec<Skill> {
    values
        .iter()
        .enumerate()
        .map(|(i, y)| Skill::new(format!("s{i}"), "Cat", ProficiencyLevel::Beginner, *y, None))
        .collect()
}

#[test]
fn test_duplicate_year_lands_on_either_match() {
    let sorted = years(&[2001, 2005, 2005, 2010]);
    let found = exact_by_year(&sorted, 2005).unwrap();
    assert_eq!(found.year_learned, 2005);
    assert!(found.name == "s1" || found.name == "s2");
    assert!(exact_by_year(&sorted, 2003).is_none());
}

fn arb_level() -> impl Strategy<Value = ProficiencyLevel> {
    prop_oneof![
        Just(ProficiencyLevel::Beginner),
        Just(ProficiencyLevel::Intermediate),
        Just(ProficiencyLevel::Advanced),
        Just(ProficiencyLevel::Expert),
    ]
}

proptest! {
    #[test]
    fn merge_sort_is_stable_and_ordered(input in prop::collection::vec((0i32..8, any::<u16>()), 0..64)) {
        let sorted = merge_sort_by(&input, |a, b| a.0.cmp(&b.0));

        let mut expected = input.clone();
        expected.sort_by_key(|pair| pair.0);
        prop_assert_eq!(&sorted, &expected);
        prop_assert!(sorted.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn merge_sort_descending_reverses_comparator(input in prop::collection::vec((0i32..8, any::<u16>()), 0..64)) {
        let sorted = merge_sort_by(&input, |a, b| b.0.cmp(&a.0));

        let mut expected = input.clone();
        expected.sort_by(|a, b| b.0.cmp(&a.0));
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn binary_search_finds_present_values(mut values in prop::collection::vec(-50i32..50, 1..64), pick in any::<prop::sample::Index>()) {
        values.sort();
        let target = values[pick.index(values.len())];
        let idx = binary_search_by(&values, &target, |a, b| a.cmp(b));
        prop_assert!(idx.is_some());
        prop_assert_eq!(values[idx.unwrap()], target);
    }

    #[test]
    fn binary_search_misses_absent_values(mut values in prop::collection::vec(-50i32..50, 0..64), target in -60i32..60) {
        values.sort();
        prop_assume!(!values.contains(&target));
        prop_assert_eq!(binary_search_by(&values, &target, |a, b| a.cmp(b)), None);
    }

    #[test]
    fn csv_line_round_trips(
        name in r#"[a-zA-Z0-9 ,"]{0,20}"#,
        category in r#"[a-zA-Z ,"]{0,12}"#,
        level in arb_level(),
        year in any::<i32>(),
        certification in prop::option::of(r#"[a-zA-Z0-9 ,"]{1,20}"#),
    ) {
        let skill = Skill::new(name, category, level, year, certification);
        let decoded = decode_line(&encode_line(&skill)).unwrap();
        prop_assert_eq!(decoded, skill);
    }
}
