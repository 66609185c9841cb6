//! 任意一串成功的增删改，逐条撤销后恢复到初始状态

use proptest::prelude::*;

use skilltrack::store::SkillStore;
use skilltrack::{ProficiencyLevel, Skill};

#[derive(Debug, Clone)]
enum Op {
    Add { name: usize, category: usize, year: i32 },
    Update { target: usize, name: usize, category: usize, year: i32 },
    Delete { target: usize },
}

const NAMES: [&str; 5] = ["Go", "Rust", "go", "Chess", "Piano"];
const CATEGORIES: [&str; 4] = ["Programming", "programming", "Music", ""];

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NAMES.len(), 0..CATEGORIES.len(), 1990i32..2030)
            .prop_map(|(name, category, year)| Op::Add { name, category, year }),
        (any::<usize>(), 0..NAMES.len(), 0..CATEGORIES.len(), 1990i32..2030).prop_map(
            |(target, name, category, year)| Op::Update { target, name, category, year }
        ),
        any::<usize>().prop_map(|target| Op::Delete { target }),
    ]
}

fn snapshot(store: &SkillStore) -> Vec<Skill> {
    let mut records = store.all_records().to_vec();
    records.sort_by(|a, b| a.id().cmp(b.id()));
    records
}

fn seeded() -> SkillStore {
    let mut store = SkillStore::in_memory();
    store
        .add(Skill::new("Go", "Programming", ProficiencyLevel::Advanced, 2022, None))
        .unwrap();
    store
        .add(Skill::new("Piano", "Music", ProficiencyLevel::Beginner, 2015, None))
        .unwrap();
    store
}

proptest! {
    #[test]
    fn undo_restores_records_and_index(ops in prop::collection::vec(arb_op(), 0..24)) {
        let mut store = seeded();
        let base_records = snapshot(&store);
        let base_stats = store.category_stats();
        let base_depth = store.undo_depth();

        let mut applied = 0usize;
        for op in ops {
            let ok = match op {
                Op::Add { name, category, year } => store
                    .add(Skill::new(NAMES[name], CATEGORIES[category], ProficiencyLevel::Intermediate, year, None))
                    .is_ok(),
                Op::Update { target, name, category, year } => {
                    if store.total_count() == 0 {
                        false
                    } else {
                        let id = store.all_records()[target % store.total_count()].id().to_string();
                        let data = Skill::new(NAMES[name], CATEGORIES[category], ProficiencyLevel::Expert, year, Some("c".to_string()));
                        store.update(&id, &data).is_ok()
                    }
                }
                Op::Delete { target } => {
                    if store.total_count() == 0 {
                        false
                    } else {
                        let id = store.all_records()[target % store.total_count()].id().to_string();
                        store.delete(&id).is_ok()
                    }
                }
            };
            if ok {
                applied += 1;
            }
        }
        prop_assert_eq!(store.undo_depth(), base_depth + applied);

        for _ in 0..applied {
            store.undo();
        }

        prop_assert_eq!(snapshot(&store), base_records);
        prop_assert_eq!(store.category_stats(), base_stats);
        prop_assert_eq!(store.undo_depth(), base_depth);
        prop_assert!(store.recently_added().iter().all(|s| store.get(s.id()).is_some()));
    }
}
