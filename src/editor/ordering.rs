use crate::services::Resource;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(format!("invalid direction: {}", s)),
        }
    }
}

/// Sorts an orderable collection by `order` and renumbers it `0..n`.
///
/// Collections without an order field are left as fetched. Ties keep fetch order.
pub fn normalize<R: Resource>(items: &mut [R]) {
    if items.first().and_then(R::order).is_none() {
        return;
    }
    items.sort_by_key(|item| item.order().unwrap_or(i32::MAX));
    renumber(items);
}

pub fn renumber<R: Resource>(items: &mut [R]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as i32);
    }
}

/// Index of the neighbour an item at `index` swaps with, if any.
pub fn neighbour(len: usize, index: usize, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Up if index > 0 && index < len => Some(index - 1),
        Direction::Down if index + 1 < len => Some(index + 1),
        _ => None,
    }
}

/// Inserts into a nested ordered list and renumbers it.
pub fn insert_at<T>(items: &mut Vec<T>, index: usize, item: T, set_order: impl FnMut(&mut T, i32)) {
    let index = index.min(items.len());
    items.insert(index, item);
    renumber_with(items, set_order);
}

/// Removes from a nested ordered list and renumbers the rest.
pub fn remove_at<T>(items: &mut Vec<T>, index: usize, set_order: impl FnMut(&mut T, i32)) -> Option<T> {
    if index >= items.len() {
        return None;
    }
    let removed = items.remove(index);
    renumber_with(items, set_order);
    Some(removed)
}

/// Moves an element of a nested ordered list one step; `false` at either end.
pub fn move_within<T>(
    items: &mut [T],
    index: usize,
    direction: Direction,
    set_order: impl FnMut(&mut T, i32),
) -> bool {
    let Some(other) = neighbour(items.len(), index, direction) else {
        return false;
    };
    items.swap(index, other);
    renumber_with(items, set_order);
    true
}

/// Sets `order` on each element of a nested list to its index.
pub fn renumber_with<T>(items: &mut [T], mut set_order: impl FnMut(&mut T, i32)) {
    for (index, item) in items.iter_mut().enumerate() {
        set_order(item, index as i32);
    }
}
