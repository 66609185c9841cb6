//! 查找：二分精确查找与线性部分匹配
//!
//! 二分查找要求输入已按同一比较器排好序（见 merge_sort_by）；
//! 有多个相等元素时返回二分过程先落到的那一个，不保证是第一个或最后一个。

use std::cmp::Ordering;

use crate::model::{ProficiencyLevel, Skill};

/// 在 sorted 中二分查找与 target 相等的元素位置
pub fn binary_search_by<T, F>(sorted: &[T], target: &T, mut cmp: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    // 区间 [lo, hi)，中点取法与闭区间 lo + (hi - lo) / 2 一致
    let mut lo = 0usize;
    let mut hi = sorted.len();
    while lo < hi {
        let mid = lo + (hi - 1 - lo) / 2;
        match cmp(&sorted[mid], target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

/// 名称比较：忽略大小写（转小写后比较）
pub fn compare_name(a: &Skill, b: &Skill) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

pub fn compare_year(a: &Skill, b: &Skill) -> Ordering {
    a.year_learned.cmp(&b.year_learned)
}

/// 按名称精确查找；sorted 必须已按 compare_name 升序排列
pub fn exact_by_name<'a>(sorted: &'a [Skill], name: &str) -> Option<&'a Skill> {
    let probe = Skill::with_id("probe", name.trim(), "", ProficiencyLevel::Beginner, 0, None);
    binary_search_by(sorted, &probe, compare_name).map(|idx| &sorted[idx])
}

/// 按年份精确查找；sorted 必须已按 compare_year 升序排列
pub fn exact_by_year(sorted: &[Skill], year: i32) -> Option<&Skill> {
    let probe = Skill::with_id("probe", "", "", ProficiencyLevel::Beginner, year, None);
    binary_search_by(sorted, &probe, compare_year).map(|idx| &sorted[idx])
}

/// 线性部分匹配：name / category / certification 任一包含查询串（忽略大小写）即命中，每条最多出现一次。
/// 查询串去空白后为空时返回空结果。
pub fn partial_match<'a>(skills: &'a [Skill], query: &str) -> Vec<&'a Skill> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }
    skills
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&q)
                || s.category.to_lowercase().contains(&q)
                || s
                    .certification
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&q))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::merge_sort_by;

    fn skill(name: &str, category: &str, year: i32, cert: Option<&str>) -> Skill {
        Skill::new(name, category, ProficiencyLevel::Beginner, year, cert.map(String::from))
    }

    #[test]
    fn test_binary_search_duplicates_land_on_either() {
        let years = [2001, 2005, 2005, 2010];
        let idx = binary_search_by(&years, &2005, |a, b| a.cmp(b));
        assert!(matches!(idx, Some(1) | Some(2)));
        assert_eq!(binary_search_by(&years, &2003, |a, b| a.cmp(b)), None);
        assert_eq!(binary_search_by(&years, &2011, |a, b| a.cmp(b)), None);
        assert_eq!(binary_search_by(&years, &1990, |a, b| a.cmp(b)), None);
    }

    #[test]
    fn test_binary_search_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(binary_search_by(&empty, &1, |a, b| a.cmp(b)), None);
    }

    #[test]
    fn test_exact_by_name_is_case_insensitive() {
        let skills = vec![
            skill("Rust", "Programming", 2023, None),
            skill("go", "Programming", 2022, None),
            skill("Chess", "Games", 2010, None),
        ];
        let sorted = merge_sort_by(&skills, compare_name);
        assert_eq!(exact_by_name(&sorted, "  GO ").map(|s| s.name.as_str()), Some("go"));
        assert!(exact_by_name(&sorted, "Haskell").is_none());
    }

    #[test]
    fn test_exact_by_year() {
        let skills = vec![
            skill("Rust", "Programming", 2023, None),
            skill("Go", "Programming", 2022, None),
        ];
        let sorted = merge_sort_by(&skills, compare_year);
        assert_eq!(exact_by_year(&sorted, 2022).map(|s| s.name.as_str()), Some("Go"));
        assert!(exact_by_year(&sorted, 1999).is_none());
    }

    #[test]
    fn test_partial_match_fields_and_dedup() {
        let skills = vec![
            skill("Rust", "Programming", 2023, Some("Rust Foundation Cert")),
            skill("Go", "Programming", 2022, None),
            skill("Woodwork", "Crafts", 2015, Some("Trusted maker")),
        ];
        let hits: Vec<&str> = partial_match(&skills, "  RUST ").iter().map(|s| s.name.as_str()).collect();
        assert_eq!(hits, vec!["Rust", "Woodwork"]);

        let hits = partial_match(&skills, "program");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_partial_match_empty_query() {
        let skills = vec![skill("Rust", "Programming", 2023, None)];
        assert!(partial_match(&skills, "").is_empty());
        assert!(partial_match(&skills, "   ").is_empty());
    }
}
