//! Canonical product-descriptor vocabulary used by the expander.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

const WORD_LIST: &[&str] = &[
    "Original", "White", "Whitening", "Clean", "Fresh", "Advanced",
    "Ultra", "Gentle", "Radiant", "Pro", "Health", "Total", "Clinical",
    "Daily", "Moisture", "Renewal", "Classic", "Comfort", "Cool", "Rush",
    "Motion", "Sense", "Arctic", "Mint", "Lemon", "Lime", "Orange",
    "Zero", "Sugar", "Free", "Purified", "Water", "Swagger", "Fiji",
    "Apollo", "Complete", "Cream", "Onion", "Nacho", "Cheese", "Ranch",
    "Double", "Stuf", "Platinum", "Liquid", "Red", "Blue", "Green",
    "Mountain", "Spring", "Berry", "Tropical", "Vanilla", "Chocolate",
    "Strawberry", "Cherry", "Grape", "Apple", "Peach", "Mango",
];

/// Uppercase form -> canonical spelling. The `BTreeMap` gives candidate
/// iteration a fixed lexical order, which keeps pattern and fuzzy matching
/// reproducible.
pub static WORDS: Lazy<BTreeMap<String, &'static str>> = Lazy::new(|| {
    WORD_LIST.iter().map(|w| (w.to_uppercase(), *w)).collect()
});
