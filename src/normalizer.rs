use crate::model::{BuyingFormat, Listing};

/// Collapses a listing's price fields into one canonical amount.
/// Precedence: a finite, positive `total_price` wins; otherwise base price
/// plus shipping, where each component counts as 0 when missing, negative
/// or not finite. Never fails; an unusable listing resolves to 0 and is
/// dropped by the sample extractors below.
pub fn resolve_price(listing: &Listing) -> f64 {
    if let Some(total) = listing.total_price {
        if total.is_finite() && total > 0.0 {
            return total;
        }
    }
    component(listing.price) + component(listing.shipping_price)
}

fn component(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Positive resolved prices of sold listings, in input order.
pub fn sold_prices(listings: &[Listing]) -> Vec<f64> {
    listings
        .iter()
        .map(resolve_price)
        .filter(|&p| p > 0.0)
        .collect()
}

/// Positive resolved prices of fixed-price active listings, in input order.
/// Auctions, best-offer and unknown-format listings do not qualify as
/// asking prices.
pub fn asking_prices(listings: &[Listing]) -> Vec<f64> {
    listings
        .iter()
        .filter(|l| l.buying_format == BuyingFormat::FixedPrice)
        .map(resolve_price)
        .filter(|&p| p > 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(
        total: Option<f64>,
        price: Option<f64>,
        shipping: Option<f64>,
        format: BuyingFormat,
    ) -> Listing {
        Listing {
            title: "test".to_string(),
            total_price: total,
            price,
            shipping_price: shipping,
            buying_format: format,
        }
    }

    #[test]
    fn test_total_price_wins() {
        let l = listing(Some(42.5), Some(30.0), Some(5.0), BuyingFormat::FixedPrice);
        assert_eq!(resolve_price(&l), 42.5);
    }

    #[test]
    fn test_falls_back_to_price_plus_shipping() {
        let l = listing(None, Some(30.0), Some(5.0), BuyingFormat::FixedPrice);
        assert_eq!(resolve_price(&l), 35.0);
    }

    #[test]
    fn test_invalid_total_falls_back() {
        let l = listing(Some(0.0), Some(30.0), None, BuyingFormat::FixedPrice);
        assert_eq!(resolve_price(&l), 30.0);
        let l = listing(Some(f64::NAN), Some(30.0), Some(4.0), BuyingFormat::FixedPrice);
        assert_eq!(resolve_price(&l), 34.0);
    }

    #[test]
    fn test_bad_components_count_as_zero() {
        let l = listing(None, Some(-10.0), Some(5.0), BuyingFormat::FixedPrice);
        assert_eq!(resolve_price(&l), 5.0);
        let l = listing(None, None, None, BuyingFormat::FixedPrice);
        assert_eq!(resolve_price(&l), 0.0);
    }

    #[test]
    fn test_sold_prices_drop_unresolvable_listings() {
        let listings = vec![
            listing(Some(90.0), None, None, BuyingFormat::Auction),
            listing(None, None, None, BuyingFormat::FixedPrice),
            listing(None, Some(50.0), Some(4.5), BuyingFormat::Unknown),
        ];
        assert_eq!(sold_prices(&listings), vec![90.0, 54.5]);
    }

    #[test]
    fn test_asking_prices_keep_fixed_price_only() {
        let listings = vec![
            listing(Some(120.0), None, None, BuyingFormat::FixedPrice),
            listing(Some(99.0), None, None, BuyingFormat::Auction),
            listing(Some(110.0), None, None, BuyingFormat::BestOffer),
            listing(Some(105.0), None, None, BuyingFormat::Unknown),
            listing(Some(125.0), None, None, BuyingFormat::FixedPrice),
        ];
        assert_eq!(asking_prices(&listings), vec![120.0, 125.0]);
    }
}
