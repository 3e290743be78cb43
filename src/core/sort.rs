use crate::domain::model::{Collection, Record, SortDirection};
use crate::utils::error::{BrowseError, Result};
use serde_json::Value;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq)]
enum SortKey<'a> {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(&'a str),
}

fn compare_int_uint(i: i64, u: u64) -> Ordering {
    if i < 0 {
        Ordering::Less
    } else {
        (i as u64).cmp(&u)
    }
}

impl SortKey<'_> {
    fn kind(&self) -> &'static str {
        match self {
            SortKey::Int(_) | SortKey::UInt(_) | SortKey::Float(_) => "a number",
            SortKey::Text(_) => "text",
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match *self {
            SortKey::Int(i) => Some(i as f64),
            SortKey::UInt(u) => Some(u as f64),
            SortKey::Float(f) => Some(f),
            SortKey::Text(_) => None,
        }
    }

    // Integers compare exactly; floats only when one side is a float.
    // Callers only compare keys of one kind.
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::UInt(a), SortKey::UInt(b)) => a.cmp(b),
            (SortKey::Int(a), SortKey::UInt(b)) => compare_int_uint(*a, *b),
            (SortKey::UInt(a), SortKey::Int(b)) => compare_int_uint(*b, *a).reverse(),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        }
    }
}

fn number_key(n: &serde_json::Number) -> Option<SortKey<'static>> {
    if let Some(i) = n.as_i64() {
        Some(SortKey::Int(i))
    } else if let Some(u) = n.as_u64() {
        Some(SortKey::UInt(u))
    } else {
        n.as_f64().map(SortKey::Float)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Pulls the sort key out of every record, rejecting the whole call when a
/// record lacks the key or its value cannot be compared with the first one.
fn extract_keys<'a>(records: &'a [Record], key: &str) -> Result<Vec<SortKey<'a>>> {
    let mut keys: Vec<SortKey<'a>> = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let sort_key = match record.get(key) {
            None | Some(Value::Null) => {
                return Err(BrowseError::InvalidKey {
                    key: key.to_string(),
                    index,
                })
            }
            Some(Value::Number(n)) => match number_key(n) {
                Some(number) => number,
                None => {
                    return Err(BrowseError::InvalidKey {
                        key: key.to_string(),
                        index,
                    })
                }
            },
            Some(Value::String(s)) => SortKey::Text(s.as_str()),
            Some(other) => {
                return Err(BrowseError::TypeMismatch {
                    key: key.to_string(),
                    index,
                    expected: keys.first().map_or("a number or text", SortKey::kind),
                    found: value_kind(other),
                })
            }
        };

        if let Some(first) = keys.first() {
            if first.kind() != sort_key.kind() {
                return Err(BrowseError::TypeMismatch {
                    key: key.to_string(),
                    index,
                    expected: first.kind(),
                    found: sort_key.kind(),
                });
            }
        }

        keys.push(sort_key);
    }

    Ok(keys)
}

/// Top-down merge sort. `take_left(l, r)` decides whether the left head goes
/// out first; returning true on ties keeps the sort stable.
pub fn merge_sort_by<T, F>(items: Vec<T>, mut take_left: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    sort_half(items, &mut take_left)
}

fn sort_half<T, F>(mut items: Vec<T>, take_left: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items;
    }

    let middle = items.len() / 2;
    let right = items.split_off(middle);

    let left_sorted = sort_half(items, take_left);
    let right_sorted = sort_half(right, take_left);

    merge(left_sorted, right_sorted, take_left)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, take_left: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if take_left(l, r) {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

/// Returns a new collection ordered by `key`. Equal keys keep their input
/// order in both directions.
pub fn sort_records(records: &[Record], key: &str, direction: SortDirection) -> Result<Collection> {
    if records.len() <= 1 {
        return Ok(records.to_vec());
    }

    let keys = extract_keys(records, key)?;
    let indexed: Vec<(SortKey<'_>, usize)> = keys.into_iter().zip(0..).collect();

    let sorted = merge_sort_by(indexed, |(l, _), (r, _)| match direction {
        SortDirection::Ascending => l.compare(r) != Ordering::Greater,
        SortDirection::Descending => l.compare(r) != Ordering::Less,
    });

    tracing::debug!(
        "Sorted {} records by '{}' ({:?})",
        sorted.len(),
        key,
        direction
    );

    Ok(sorted
        .into_iter()
        .map(|(_, index)| records[index].clone())
        .collect())
}

pub fn sort(records: &[Record], key: &str, ascending: bool) -> Result<Collection> {
    sort_records(records, key, SortDirection::from_ascending(ascending))
}
