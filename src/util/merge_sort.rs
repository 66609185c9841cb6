//! 稳定归并排序
//!
//! 中点二分、递归排序两半、线性合并；比较相等时优先取左半部分，因此相等元素保持输入顺序。
//! 降序请反转比较器（`|a, b| cmp(a, b).reverse()`），不要反转结果，否则相等元素的顺序会颠倒。

use std::cmp::Ordering;

/// 返回按 cmp 非递减排列的新 Vec，不修改输入
pub fn merge_sort_by<T, F>(input: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_slice(input, &mut cmp)
}

fn sort_slice<T, F>(items: &[T], cmp: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = sort_slice(&items[..mid], cmp);
    let right = sort_slice(&items[mid..], cmp);
    merge(left, right, cmp)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        out.extend(next);
    }
    out
}
