use crate::core::sort::sort_records;
use crate::domain::model::{Collection, Record, SortDirection};
use crate::utils::error::Result;
use serde_json::Value;

fn ids_match(candidate: &Value, stall_id: &Value) -> bool {
    match (candidate, stall_id) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        (Value::String(a), Value::String(b)) => a.trim() == b.trim(),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            s.trim().parse::<f64>().ok() == n.as_f64()
        }
        _ => false,
    }
}

/// Menu items belonging to one stall, cheapest first.
pub fn menu_for_stall(
    items: &[Record],
    stall_id_field: &str,
    stall_id: &Value,
    price_field: &str,
) -> Result<Collection> {
    let menu: Collection = items
        .iter()
        .filter(|item| item.get(stall_id_field).is_some_and(|id| ids_match(id, stall_id)))
        .cloned()
        .collect();

    tracing::debug!("Stall {} has {} menu items", stall_id, menu.len());
    sort_records(&menu, price_field, SortDirection::Ascending)
}
