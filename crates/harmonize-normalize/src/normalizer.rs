//! The full normalization pipeline: clean, extract size, tokenize, detect
//! brand, expand the remaining tokens, reassemble.
//!
//! The pipeline is pure given a fixed dictionary snapshot: identical input
//! and dictionary state always produce an identical result.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use harmonize_core::confidence::Confidence;
use harmonize_core::models::normalization::{
    Expansion, ExpansionMethod, NormalizationResult, ParsedAttributes,
};
use harmonize_knowledge::BrandKnowledgeBase;

use crate::expander::{capitalize, AbbreviationExpander};
use crate::size;

/// Widest leading-token window tried during brand detection.
const BRAND_WINDOW: usize = 3;

static PROMO_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(new|sale|bogo|clearance|special offer|limited time)\b",
        r"(?i)\b(buy \d+ get \d+)\b",
        r"[!*#]+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("promo pattern compiles"))
    .collect()
});

/// Whole-word retail shorthand that `clean_description` rewrites in place.
static SHORTHAND: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\btp\b", "toothpaste"),
        (r"(?i)\bmw\b", "mouthwash"),
        (r"(?i)\bsda\b", "soda"),
        (r"(?i)\bbev\b", "beverage"),
        (r"(?i)\bdet\b", "detergent"),
        (r"(?i)\bsh\b", "shampoo"),
        (r"(?i)\bcond\b", "conditioner"),
    ]
    .iter()
    .map(|(p, full)| (Regex::new(p).expect("shorthand pattern compiles"), *full))
    .collect()
});

static VARIANT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(mint|fresh|clean|original|cherry|vanilla|lemon|lime|orange|grape)\b",
        r"(?i)\b(whitening|sensitive|protection|deep clean|advanced)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("variant pattern compiles"))
    .collect()
});

pub struct TextNormalizer {
    kb: Arc<BrandKnowledgeBase>,
    expander: AbbreviationExpander,
}

impl TextNormalizer {
    pub fn new(kb: Arc<BrandKnowledgeBase>) -> Self {
        let expander = AbbreviationExpander::new(kb.clone());
        Self { kb, expander }
    }

    /// Normalize one product description.
    pub fn normalize(&self, text: &str) -> NormalizationResult {
        let original = text.trim().to_string();
        let cleaned = clean_chars(&original);
        let (size, without_size) = size::split_size(&cleaned);
        let tokens = tokenize(&without_size);

        let mut expansions: Vec<Expansion> = Vec::new();
        let mut brand = None;
        let mut brand_confidence = Confidence::new(0.0);
        let mut category_hint = None;
        let mut consumed = 0;

        // Widest leading window wins: "MTN DEW" beats "MTN".
        for width in (1..=BRAND_WINDOW.min(tokens.len())).rev() {
            let window = tokens[..width].join(" ");
            if let Some(m) = self.kb.lookup(&window) {
                if !window.eq_ignore_ascii_case(&m.canonical_name) {
                    expansions.push(Expansion {
                        original: window,
                        expanded: m.canonical_name.clone(),
                        confidence: m.confidence,
                        method: ExpansionMethod::Dictionary,
                    });
                }
                brand = Some(m.canonical_name);
                brand_confidence = m.confidence;
                category_hint = m.category;
                consumed = width;
                break;
            }
        }

        let mut normalized_tokens: Vec<String> = Vec::with_capacity(tokens.len());
        if let Some(name) = &brand {
            normalized_tokens.push(name.clone());
        }

        for token in &tokens[consumed..] {
            let result = self.expander.expand(token);
            normalized_tokens.push(result.expanded.clone());
            if result.changed() {
                expansions.push(result);
            }
        }

        let mut normalized = normalized_tokens.join(" ");
        if let Some(size) = &size {
            let suffix = size::format_suffix(size);
            if normalized.is_empty() {
                normalized = suffix;
            } else {
                normalized = format!("{normalized} {suffix}");
            }
        }

        NormalizationResult {
            original,
            normalized,
            brand,
            brand_confidence,
            size,
            expansions,
            category_hint,
        }
    }

    /// Normalize a batch of descriptions.
    pub fn normalize_batch(&self, texts: &[String]) -> Vec<NormalizationResult> {
        texts.iter().map(|t| self.normalize(t)).collect()
    }

    /// Expand abbreviations in a text without the rest of the pipeline.
    pub fn expand_text(&self, text: &str) -> (String, Vec<Expansion>) {
        self.expander.expand_text(text)
    }

    /// Strip promotional noise and rewrite whole-word retail shorthand.
    pub fn clean_description(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for pattern in PROMO_PATTERNS.iter() {
            cleaned = pattern.replace_all(&cleaned, "").into_owned();
        }
        for (pattern, full) in SHORTHAND.iter() {
            cleaned = pattern.replace_all(&cleaned, *full).into_owned();
        }
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Parse brand, size and variant hints without normalizing.
    pub fn parse_attributes(&self, text: &str) -> ParsedAttributes {
        let lower = text.to_lowercase();

        // Longest brand names first so "Mountain Dew" beats "Mountain".
        let mut names = self.kb.all_brands();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let brand = names
            .into_iter()
            .find(|name| lower.contains(&name.to_lowercase()));

        let variant = VARIANT_PATTERNS.iter().find_map(|pattern| {
            pattern
                .find(&lower)
                .map(|m| title_case(m.as_str()))
        });

        ParsedAttributes {
            brand,
            size: size::extract_size(text),
            variant,
        }
    }

    /// Human-readable summary of the expansions a normalization made.
    pub fn expansion_summary(result: &NormalizationResult) -> String {
        if result.expansions.is_empty() {
            return "No expansions made".to_string();
        }
        result
            .expansions
            .iter()
            .map(|e| format!("'{}' -> '{}'", e.original, e.expanded))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Drop characters outside alphanumerics/underscore/space/`-&.'` and
/// collapse runs of whitespace.
fn clean_chars(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || matches!(c, '-' | '&' | '.' | '\'') {
                c
            } else {
                ' '
            }
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split on whitespace, hyphens and underscores.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
