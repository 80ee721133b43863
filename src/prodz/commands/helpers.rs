use crate::model::Product;

/// Next id to assign: one past the highest id currently in the collection.
/// Computed over the whole collection, not the last element, so ids stay
/// unique after arbitrary deletions.
pub fn next_id(products: &[Product]) -> u64 {
    products.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

pub fn position_by_id(products: &[Product], id: u64) -> Option<usize> {
    products.iter().position(|p| p.id == id)
}

/// Whether `code` is already used by a product other than `exclude_id`
pub fn code_taken(products: &[Product], code: &str, exclude_id: Option<u64>) -> bool {
    products
        .iter()
        .any(|p| p.code == code && Some(p.id) != exclude_id)
}
