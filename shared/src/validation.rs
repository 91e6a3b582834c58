//! Order validation and aggregation
//!
//! Pure checks that run client-side before an order draft is submitted.
//! The backend re-validates stock inside its own transaction at creation
//! time; the checks here only give fast feedback against a catalog snapshot
//! that may already be stale, and must never be treated as sufficient on
//! their own.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{OrderLineDraft, Product};

/// First validation failure found in an order draft.
///
/// Validation is first-failure-wins: the first offending line in list order
/// is reported and nothing after it is inspected. Errors render directly as
/// the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderValidationError {
    #[error("order must contain at least one item")]
    EmptyOrder,

    #[error("invalid product reference")]
    InvalidProductReference,

    #[error("quantity must be greater than zero")]
    NonPositiveQuantity,

    #[error("invalid unit price")]
    InvalidUnitPrice,

    /// The referenced product is missing from the catalog snapshot, usually
    /// because it was deleted after the client cached it.
    #[error("product with id {product_id} not found")]
    ProductNotFound { product_id: i32 },

    #[error("insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i32,
        requested: i32,
    },

    #[error("{name} is out of stock")]
    OutOfStock { name: String },
}

/// Structural checks on a draft, run before any catalog lookup or network
/// call: at least one line, and per line a positive product reference,
/// quantity, and unit price.
pub fn validate_draft(lines: &[OrderLineDraft]) -> Result<(), OrderValidationError> {
    if lines.is_empty() {
        return Err(OrderValidationError::EmptyOrder);
    }

    for line in lines {
        if line.product_id <= 0 {
            return Err(OrderValidationError::InvalidProductReference);
        }
        if line.quantity <= 0 {
            return Err(OrderValidationError::NonPositiveQuantity);
        }
        if line.unit_price <= Decimal::ZERO {
            return Err(OrderValidationError::InvalidUnitPrice);
        }
    }

    Ok(())
}

/// Check every draft line against a catalog snapshot.
///
/// Each line's product is looked up by id (first match); a missing product
/// or a requested quantity above the cached stock fails the draft. Advisory
/// only: the snapshot carries no liveness guarantee, so a pass here can
/// still be rejected by the backend.
pub fn validate_stock(
    lines: &[OrderLineDraft],
    catalog: &[Product],
) -> Result<(), OrderValidationError> {
    if lines.is_empty() {
        return Err(OrderValidationError::EmptyOrder);
    }

    for line in lines {
        let product = catalog
            .iter()
            .find(|p| p.product_id == line.product_id)
            .ok_or(OrderValidationError::ProductNotFound {
                product_id: line.product_id,
            })?;

        if product.stock < line.quantity {
            return Err(OrderValidationError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: line.quantity,
            });
        }
    }

    Ok(())
}

/// Stock check for a single line, distinguishing a completely sold-out
/// product from one with some stock left but not enough.
pub fn validate_single_item(
    product: &Product,
    requested: i32,
) -> Result<(), OrderValidationError> {
    if product.stock == 0 {
        return Err(OrderValidationError::OutOfStock {
            name: product.name.clone(),
        });
    }
    if product.stock < requested {
        return Err(OrderValidationError::InsufficientStock {
            name: product.name.clone(),
            available: product.stock,
            requested,
        });
    }
    Ok(())
}

/// Sum of line subtotals; an empty draft totals zero.
pub fn order_total(lines: &[OrderLineDraft]) -> Decimal {
    lines.iter().map(OrderLineDraft::subtotal).sum()
}

/// Stock left after an order of `ordered` units, floored at zero.
///
/// Display helper only; never mutates the catalog entry.
pub fn remaining_stock(product: &Product, ordered: i32) -> i32 {
    (product.stock - ordered).max(0)
}

/// Short availability label for a catalog entry
pub fn stock_status_message(product: &Product) -> String {
    match product.stock {
        0 => "Out of stock".to_string(),
        1 => "Available: 1 item".to_string(),
        n => format!("Available: {} items", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn product(id: i32, name: &str, stock: i32, price: &str) -> Product {
        Product {
            product_id: id,
            name: name.to_string(),
            stock,
            unit_price: dec(price),
            image_url: None,
        }
    }

    fn line(product_id: i32, quantity: i32, price: &str) -> OrderLineDraft {
        OrderLineDraft {
            product_id,
            product_name: format!("product-{}", product_id),
            quantity,
            unit_price: dec(price),
        }
    }

    // ========================================================================
    // Structural validation
    // ========================================================================

    #[test]
    fn empty_draft_is_rejected() {
        let err = validate_draft(&[]).unwrap_err();
        assert_eq!(err, OrderValidationError::EmptyOrder);
        assert_eq!(err.to_string(), "order must contain at least one item");
    }

    #[test]
    fn unset_product_reference_is_rejected() {
        let err = validate_draft(&[line(0, 1, "10.00")]).unwrap_err();
        assert_eq!(err, OrderValidationError::InvalidProductReference);
    }

    #[test]
    fn negative_product_reference_is_rejected() {
        let err = validate_draft(&[line(-3, 1, "10.00")]).unwrap_err();
        assert_eq!(err, OrderValidationError::InvalidProductReference);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let err = validate_draft(&[line(1, 0, "10.00")]).unwrap_err();
        assert_eq!(err, OrderValidationError::NonPositiveQuantity);
        assert_eq!(err.to_string(), "quantity must be greater than zero");
    }

    #[test]
    fn zero_unit_price_is_rejected() {
        let err = validate_draft(&[line(1, 1, "0")]).unwrap_err();
        assert_eq!(err, OrderValidationError::InvalidUnitPrice);
    }

    #[test]
    fn negative_unit_price_is_rejected() {
        let err = validate_draft(&[line(1, 1, "-1.50")]).unwrap_err();
        assert_eq!(err, OrderValidationError::InvalidUnitPrice);
    }

    #[test]
    fn first_structural_failure_wins() {
        // Second line has a bad reference, third a bad quantity; only the
        // second is reported.
        let lines = [line(1, 1, "10.00"), line(0, 1, "10.00"), line(2, 0, "5.00")];
        let err = validate_draft(&lines).unwrap_err();
        assert_eq!(err, OrderValidationError::InvalidProductReference);
    }

    #[test]
    fn well_formed_draft_passes_structural_checks() {
        let lines = [line(1, 2, "10.00"), line(2, 1, "3.25")];
        assert!(validate_draft(&lines).is_ok());
    }

    // ========================================================================
    // Stock validation
    // ========================================================================

    #[test]
    fn stock_validation_rejects_empty_draft() {
        let catalog = [product(1, "Widget", 5, "10.00")];
        let err = validate_stock(&[], &catalog).unwrap_err();
        assert_eq!(err, OrderValidationError::EmptyOrder);
    }

    #[test]
    fn order_within_stock_is_valid() {
        let catalog = [product(1, "Widget", 5, "10.00")];
        let lines = [line(1, 3, "10.00")];
        assert!(validate_stock(&lines, &catalog).is_ok());
    }

    #[test]
    fn order_exactly_at_stock_is_valid() {
        let catalog = [product(1, "Widget", 5, "10.00")];
        let lines = [line(1, 5, "10.00")];
        assert!(validate_stock(&lines, &catalog).is_ok());
    }

    #[test]
    fn order_above_stock_is_rejected_with_context() {
        let catalog = [product(1, "Widget", 5, "10.00")];
        let lines = [line(1, 10, "10.00")];
        let err = validate_stock(&lines, &catalog).unwrap_err();
        assert_eq!(
            err,
            OrderValidationError::InsufficientStock {
                name: "Widget".to_string(),
                available: 5,
                requested: 10,
            }
        );
        let message = err.to_string();
        assert!(message.contains("Widget"));
        assert!(message.contains('5'));
        assert!(message.contains("10"));
    }

    #[test]
    fn missing_product_is_rejected_with_its_id() {
        let lines = [line(1, 1, "10.00")];
        let err = validate_stock(&lines, &[]).unwrap_err();
        assert_eq!(err, OrderValidationError::ProductNotFound { product_id: 1 });
        assert_eq!(err.to_string(), "product with id 1 not found");
    }

    #[test]
    fn first_failing_line_wins_over_later_valid_lines() {
        let catalog = [product(2, "Gadget", 10, "4.00")];
        // First line references a deleted product, second is fine.
        let lines = [line(1, 1, "10.00"), line(2, 1, "4.00")];
        let err = validate_stock(&lines, &catalog).unwrap_err();
        assert_eq!(err, OrderValidationError::ProductNotFound { product_id: 1 });
    }

    #[test]
    fn first_failing_line_wins_over_later_failing_lines() {
        let catalog = [product(1, "Widget", 1, "10.00"), product(2, "Gadget", 0, "4.00")];
        let lines = [line(1, 3, "10.00"), line(2, 1, "4.00")];
        let err = validate_stock(&lines, &catalog).unwrap_err();
        assert_eq!(
            err,
            OrderValidationError::InsufficientStock {
                name: "Widget".to_string(),
                available: 1,
                requested: 3,
            }
        );
    }

    #[test]
    fn multi_line_order_within_stock_is_valid() {
        let catalog = [
            product(1, "Widget", 5, "10.00"),
            product(2, "Gadget", 2, "4.00"),
        ];
        let lines = [line(1, 5, "10.00"), line(2, 2, "4.00")];
        assert!(validate_stock(&lines, &catalog).is_ok());
    }

    // ========================================================================
    // Single item check
    // ========================================================================

    #[test]
    fn sold_out_product_gets_a_distinct_message() {
        let sold_out = product(1, "Widget", 0, "10.00");
        let err = validate_single_item(&sold_out, 1).unwrap_err();
        assert_eq!(
            err,
            OrderValidationError::OutOfStock {
                name: "Widget".to_string()
            }
        );
        assert_eq!(err.to_string(), "Widget is out of stock");
    }

    #[test]
    fn low_stock_product_gets_the_insufficient_message() {
        let low = product(1, "Widget", 2, "10.00");
        let err = validate_single_item(&low, 3).unwrap_err();
        assert!(matches!(
            err,
            OrderValidationError::InsufficientStock { available: 2, requested: 3, .. }
        ));
    }

    #[test]
    fn single_item_within_stock_passes() {
        let available = product(1, "Widget", 5, "10.00");
        assert!(validate_single_item(&available, 5).is_ok());
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    #[test]
    fn subtotal_is_quantity_times_unit_price() {
        assert_eq!(line(1, 3, "10.00").subtotal(), dec("30.00"));
        assert_eq!(line(1, 7, "2.45").subtotal(), dec("17.15"));
    }

    #[test]
    fn order_total_sums_line_subtotals() {
        let lines = [line(1, 3, "10.00"), line(2, 2, "4.50")];
        assert_eq!(order_total(&lines), dec("39.00"));
    }

    #[test]
    fn empty_order_totals_zero() {
        assert_eq!(order_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn decimal_totals_do_not_drift() {
        // 0.10 * 3 is exact in decimal arithmetic
        let lines = [line(1, 3, "0.10")];
        assert_eq!(order_total(&lines), dec("0.30"));
    }

    #[test]
    fn remaining_stock_subtracts_ordered_quantity() {
        let widget = product(1, "Widget", 5, "10.00");
        assert_eq!(remaining_stock(&widget, 3), 2);
        assert_eq!(remaining_stock(&widget, 5), 0);
    }

    #[test]
    fn remaining_stock_never_goes_negative() {
        let widget = product(1, "Widget", 5, "10.00");
        assert_eq!(remaining_stock(&widget, 10), 0);
    }

    #[test]
    fn stock_status_message_covers_all_shapes() {
        assert_eq!(stock_status_message(&product(1, "W", 0, "1.00")), "Out of stock");
        assert_eq!(stock_status_message(&product(1, "W", 1, "1.00")), "Available: 1 item");
        assert_eq!(stock_status_message(&product(1, "W", 8, "1.00")), "Available: 8 items");
    }

    // ========================================================================
    // End-to-end scenario
    // ========================================================================

    #[test]
    fn widget_scenario_validates_and_totals() {
        let catalog = [product(1, "Widget", 5, "10.00")];
        let lines = [line(1, 3, "10.00")];

        assert!(validate_draft(&lines).is_ok());
        assert!(validate_stock(&lines, &catalog).is_ok());
        assert_eq!(order_total(&lines), dec("30.00"));
    }
}
