use crate::models::ShoeItem;

/// Shoes whose low price is at or below `threshold`, cheapest first.
///
/// The sort is stable, so shoes with the same price keep the order the API
/// returned them in. The input is left untouched.
pub fn filter_at_or_below(items: &[ShoeItem], threshold: f64) -> Vec<ShoeItem> {
    let mut kept: Vec<ShoeItem> = items
        .iter()
        .filter(|item| item.price_low <= threshold)
        .cloned()
        .collect();

    kept.sort_by(|a, b| a.price_low.total_cmp(&b.price_low));
    kept
}
