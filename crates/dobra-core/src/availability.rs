//! Availability policy: what a product's status means for the shopper.

use serde::Serialize;

use crate::catalog::ProductStatus;

/// Displayable availability of a product and whether it may be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub label: String,
    /// `false` only for products explicitly sold out. The contact action
    /// additionally requires a site phone; see [`crate::contact_for_product`].
    pub contact_enabled: bool,
}

/// Maps a status and optional stock count to a label and a contact decision.
///
/// Quantity is only read for [`ProductStatus::Available`]. Unknown statuses
/// echo their raw value and keep contact enabled.
#[must_use]
pub fn describe_availability(status: &ProductStatus, quantity: Option<u32>) -> Availability {
    let (label, contact_enabled) = match (status, quantity) {
        (ProductStatus::Available, Some(1)) => ("1 unit available".to_string(), true),
        (ProductStatus::Available, Some(n)) => (format!("{n} units available"), true),
        (ProductStatus::Available, None) => ("available".to_string(), true),
        (ProductStatus::MadeToOrder, _) => (
            "made to order — production starts after order".to_string(),
            true,
        ),
        (ProductStatus::SoldOut, _) => ("currently sold out".to_string(), false),
        (ProductStatus::Other(raw), _) => (raw.clone(), true),
    };

    Availability {
        label,
        contact_enabled,
    }
}
