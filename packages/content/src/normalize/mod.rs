//! Entity normalizers: one raw resource in, one flat view model out.
//!
//! Every normalizer is a pure function of `(resource, included)` (plus the
//! content origin where URLs are built). Missing optional fields fall back
//! to named defaults.

pub mod article;
pub mod feature_card;
pub mod footer;
pub mod product;
pub mod trade;

pub use article::normalize_article;
pub use feature_card::normalize_feature_card;
pub use footer::normalize_footer;
pub use product::normalize_product;
pub use trade::{normalize_trade_record, TRADE_ROLE_FIELD};

use drupal_client::{Document, Resource};

use crate::collection::{normalize_collection, normalize_first, try_normalize_collection};
use crate::error::Result;
use crate::origin::ContentOrigin;
use crate::resolver::{resolve, resolve_many, Included};
use crate::types::{Article, FeatureCard, FooterBlock, Product, TradeBuckets};

/// All products of a collection document.
pub fn products(document: &Document, origin: &ContentOrigin) -> Vec<Product> {
    normalize_collection(document, |r, included| normalize_product(r, included, origin))
}

/// All articles of a collection document.
pub fn articles(document: &Document, origin: &ContentOrigin) -> Vec<Article> {
    normalize_collection(document, |r, included| normalize_article(r, included, origin))
}

/// All feature cards of a collection document.
pub fn feature_cards(document: &Document, origin: &ContentOrigin) -> Vec<FeatureCard> {
    normalize_collection(document, |r, included| normalize_feature_card(r, included, origin))
}

/// The footer block, taken from the first item. `None` when there is none.
pub fn footer(document: &Document, origin: &ContentOrigin) -> Option<FooterBlock> {
    normalize_first(document, |r, included| normalize_footer(r, included, origin))
}

/// Trade records bucketed by role.
///
/// Any unparseable figure fails the whole collection; callers substitute
/// [`crate::fallback_trade`] in that case.
pub fn trade(document: &Document) -> Result<TradeBuckets> {
    let records = try_normalize_collection(document, |r, _| normalize_trade_record(r))?;
    let mut buckets = TradeBuckets::default();
    for (role, record) in records.into_iter().flatten() {
        buckets.push(role, record);
    }
    Ok(buckets)
}

/// `name` of the term a single-valued relationship points at.
pub(crate) fn related_name<'a>(
    resource: &Resource,
    relationship: &str,
    included: &Included<'a>,
) -> Option<&'a str> {
    resolve(resource, relationship, included).and_then(|term| term.attr_str("name"))
}

/// `name`s of the terms a multi-valued relationship points at, in order.
pub(crate) fn related_names(
    resource: &Resource,
    relationship: &str,
    included: &Included<'_>,
) -> Vec<String> {
    resolve_many(resource, relationship, included)
        .into_iter()
        .filter_map(|term| term.attr_str("name"))
        .map(str::to_string)
        .collect()
}

/// Absolute URL of the file a single-valued relationship points at.
pub(crate) fn related_file_url(
    resource: &Resource,
    relationship: &str,
    included: &Included<'_>,
    origin: &ContentOrigin,
) -> Option<String> {
    resolve(resource, relationship, included).and_then(|file| origin.file_url(file))
}

/// Non-empty string attribute, or `""`.
pub(crate) fn text(resource: &Resource, name: &str) -> String {
    resource.attr_str(name).unwrap_or_default().to_string()
}
