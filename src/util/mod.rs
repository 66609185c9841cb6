//! 通用算法：稳定归并排序、二分 / 线性查找

pub mod merge_sort;
pub mod search;

pub use merge_sort::merge_sort_by;
pub use search::{
    binary_search_by, compare_name, compare_year, exact_by_name, exact_by_year, partial_match,
};
