//! Built-in FMCG knowledge: brand aliases and retail abbreviations.
//!
//! Keys are uppercase aliases as they appear in retailer feeds. Multiple
//! aliases map to one canonical identity. `BTreeMap` keeps iteration
//! deterministic for callers that enumerate the tables.

use std::collections::BTreeMap;

use harmonize_core::models::brand::BrandEntry;
use once_cell::sync::Lazy;

/// alias -> (canonical name, category, manufacturer)
const BRAND_ROWS: &[(&str, &str, &str, &str)] = &[
    // Beverages - PepsiCo
    ("PEPSI", "Pepsi", "Beverages", "PepsiCo"),
    ("PEP", "Pepsi", "Beverages", "PepsiCo"),
    ("MOUNTAIN DEW", "Mountain Dew", "Beverages", "PepsiCo"),
    ("MTN DEW", "Mountain Dew", "Beverages", "PepsiCo"),
    ("MTN", "Mountain", "Beverages", "PepsiCo"),
    ("DEW", "Dew", "Beverages", "PepsiCo"),
    ("GATORADE", "Gatorade", "Beverages", "PepsiCo"),
    ("GAT", "Gatorade", "Beverages", "PepsiCo"),
    ("AQUAFINA", "Aquafina", "Beverages", "PepsiCo"),
    ("AQF", "Aquafina", "Beverages", "PepsiCo"),
    // Beverages - Coca-Cola
    ("COCA-COLA", "Coca-Cola", "Beverages", "The Coca-Cola Company"),
    ("COCA COLA", "Coca-Cola", "Beverages", "The Coca-Cola Company"),
    ("COKE", "Coca-Cola", "Beverages", "The Coca-Cola Company"),
    ("CC", "Coca-Cola", "Beverages", "The Coca-Cola Company"),
    ("SPRITE", "Sprite", "Beverages", "The Coca-Cola Company"),
    ("SPR", "Sprite", "Beverages", "The Coca-Cola Company"),
    ("FANTA", "Fanta", "Beverages", "The Coca-Cola Company"),
    ("FNT", "Fanta", "Beverages", "The Coca-Cola Company"),
    ("DASANI", "Dasani", "Beverages", "The Coca-Cola Company"),
    ("DAS", "Dasani", "Beverages", "The Coca-Cola Company"),
    // Oral care
    ("CREST", "Crest", "Oral Care", "Procter & Gamble"),
    ("CR", "Crest", "Oral Care", "Procter & Gamble"),
    ("CRST", "Crest", "Oral Care", "Procter & Gamble"),
    ("COLGATE", "Colgate", "Oral Care", "Colgate-Palmolive"),
    ("CG", "Colgate", "Oral Care", "Colgate-Palmolive"),
    ("CLG", "Colgate", "Oral Care", "Colgate-Palmolive"),
    ("SENSODYNE", "Sensodyne", "Oral Care", "GSK"),
    ("SN", "Sensodyne", "Oral Care", "GSK"),
    ("SENS", "Sensodyne", "Oral Care", "GSK"),
    ("LISTERINE", "Listerine", "Oral Care", "Johnson & Johnson"),
    ("LST", "Listerine", "Oral Care", "Johnson & Johnson"),
    ("LSTR", "Listerine", "Oral Care", "Johnson & Johnson"),
    // Personal care
    ("HEAD & SHOULDERS", "Head & Shoulders", "Personal Care", "Procter & Gamble"),
    ("HEAD AND SHOULDERS", "Head & Shoulders", "Personal Care", "Procter & Gamble"),
    ("H&S", "Head & Shoulders", "Personal Care", "Procter & Gamble"),
    ("HS", "Head & Shoulders", "Personal Care", "Procter & Gamble"),
    ("PANTENE", "Pantene", "Personal Care", "Procter & Gamble"),
    ("PAN", "Pantene", "Personal Care", "Procter & Gamble"),
    ("PANT", "Pantene", "Personal Care", "Procter & Gamble"),
    ("OLD SPICE", "Old Spice", "Personal Care", "Procter & Gamble"),
    ("OS", "Old Spice", "Personal Care", "Procter & Gamble"),
    ("SECRET", "Secret", "Personal Care", "Procter & Gamble"),
    ("SCR", "Secret", "Personal Care", "Procter & Gamble"),
    ("SCRT", "Secret", "Personal Care", "Procter & Gamble"),
    ("DOVE", "Dove", "Personal Care", "Unilever"),
    ("DV", "Dove", "Personal Care", "Unilever"),
    ("DOV", "Dove", "Personal Care", "Unilever"),
    ("AXE", "Axe", "Personal Care", "Unilever"),
    ("DEGREE", "Degree", "Personal Care", "Unilever"),
    ("DEG", "Degree", "Personal Care", "Unilever"),
    // Household
    ("TIDE", "Tide", "Household", "Procter & Gamble"),
    ("TD", "Tide", "Household", "Procter & Gamble"),
    ("TDE", "Tide", "Household", "Procter & Gamble"),
    ("GAIN", "Gain", "Household", "Procter & Gamble"),
    ("GN", "Gain", "Household", "Procter & Gamble"),
    ("DAWN", "Dawn", "Household", "Procter & Gamble"),
    ("DWN", "Dawn", "Household", "Procter & Gamble"),
    ("PALMOLIVE", "Palmolive", "Household", "Colgate-Palmolive"),
    ("PLM", "Palmolive", "Household", "Colgate-Palmolive"),
    ("PERSIL", "Persil", "Household", "Henkel"),
    ("PRS", "Persil", "Household", "Henkel"),
    // Snacks
    ("LAYS", "Lay's", "Snacks", "PepsiCo"),
    ("LAY'S", "Lay's", "Snacks", "PepsiCo"),
    ("LAY", "Lay's", "Snacks", "PepsiCo"),
    ("DORITOS", "Doritos", "Snacks", "PepsiCo"),
    ("DOR", "Doritos", "Snacks", "PepsiCo"),
    ("TOSTITOS", "Tostitos", "Snacks", "PepsiCo"),
    ("TOS", "Tostitos", "Snacks", "PepsiCo"),
    ("PRINGLES", "Pringles", "Snacks", "Kellogg's"),
    ("PRG", "Pringles", "Snacks", "Kellogg's"),
    ("OREO", "Oreo", "Snacks", "Mondelez"),
    ("ORO", "Oreo", "Snacks", "Mondelez"),
    ("CHIPS AHOY", "Chips Ahoy!", "Snacks", "Mondelez"),
    ("CHIPS AHOY!", "Chips Ahoy!", "Snacks", "Mondelez"),
    ("CHP", "Chips Ahoy!", "Snacks", "Mondelez"),
];

/// abbreviation -> expanded word, common retail shorthand.
const ABBREVIATION_ROWS: &[(&str, &str)] = &[
    ("ORIG", "Original"),
    ("ORG", "Original"),
    ("ORGNL", "Original"),
    ("WHT", "White"),
    ("WHTN", "Whitening"),
    ("WHTNG", "Whitening"),
    ("CLN", "Clean"),
    ("FRSH", "Fresh"),
    ("FRS", "Fresh"),
    ("ADV", "Advanced"),
    ("ADVNC", "Advanced"),
    ("ULT", "Ultra"),
    ("ULTR", "Ultra"),
    ("GNTL", "Gentle"),
    ("GNT", "Gentle"),
    ("RDNT", "Radiant"),
    ("RAD", "Radiant"),
    ("PRO", "Pro"),
    ("PRHLTH", "Pro-Health"),
    ("PROHLTH", "Pro-Health"),
    ("TOTL", "Total"),
    ("TTL", "Total"),
    ("TOT", "Total"),
    ("CLNC", "Clinical"),
    ("CLNCL", "Clinical"),
    ("DLY", "Daily"),
    ("MSTR", "Moisture"),
    ("MOIST", "Moisture"),
    ("RNWL", "Renewal"),
    ("RENWL", "Renewal"),
    ("CLS", "Classic"),
    ("CLSC", "Classic"),
    ("CMFRT", "Comfort"),
    ("COMF", "Comfort"),
    ("CL", "Cool"),
    ("RSH", "Rush"),
    ("MTN SNS", "Motion Sense"),
    ("ARCT", "Arctic"),
    ("ARCTC", "Arctic"),
    ("MNT", "Mint"),
    ("MINT", "Mint"),
    ("LMN", "Lemon"),
    ("LIME", "Lime"),
    ("ORNG", "Orange"),
    ("ORN", "Orange"),
    ("ZRO", "Zero"),
    ("ZERO", "Zero"),
    ("SGR", "Sugar"),
    ("SGAR", "Sugar"),
    ("FRE", "Free"),
    ("FREE", "Free"),
    ("PRFD", "Purified"),
    ("PURE", "Purified"),
    ("WTR", "Water"),
    ("2IN1", "2-in-1"),
    ("2N1", "2-in-1"),
    ("PROV", "Pro-V"),
    ("PRV", "Pro-V"),
    ("SWGR", "Swagger"),
    ("FJI", "Fiji"),
    ("APLL", "Apollo"),
    ("APLO", "Apollo"),
    ("CMPL", "Complete"),
    ("COMPLT", "Complete"),
    ("BBQ", "BBQ"),
    ("SR CRM", "Sour Cream"),
    ("SRCM", "Sour Cream"),
    ("SR", "Sour"),
    ("CRM", "Cream"),
    ("ONION", "Onion"),
    ("ONIN", "Onion"),
    ("NCH", "Nacho"),
    ("NCHO", "Nacho"),
    ("CHS", "Cheese"),
    ("CHSE", "Cheese"),
    ("RNCH", "Ranch"),
    ("RANCH", "Ranch"),
    ("DBL", "Double"),
    ("DBLE", "Double"),
    ("STF", "Stuf"),
    ("STUF", "Stuf"),
    ("PLTNM", "Platinum"),
    ("PLAT", "Platinum"),
    ("LQD", "Liquid"),
    ("OXI", "Oxi"),
    ("PROCLN", "ProClean"),
    ("PROCLEAN", "ProClean"),
    ("CODE", "Code"),
    ("RED", "Red"),
    ("BLU", "Blue"),
    ("GRN", "Green"),
    ("3D", "3D"),
    ("3DW", "3D White"),
];

/// Static brand alias table.
pub static BRANDS: Lazy<BTreeMap<&'static str, BrandEntry>> = Lazy::new(|| {
    BRAND_ROWS
        .iter()
        .map(|(alias, name, category, manufacturer)| {
            (*alias, BrandEntry::new(name, category, manufacturer))
        })
        .collect()
});

/// Static abbreviation table.
pub static ABBREVIATIONS: Lazy<BTreeMap<&'static str, &'static str>> =
    Lazy::new(|| ABBREVIATION_ROWS.iter().copied().collect());
