//! Flat view models produced by normalization.
//!
//! All of them serialize with camelCase field names, which is what the page
//! components read.

pub mod article;
pub mod feature_card;
pub mod footer;
pub mod product;
pub mod trade;

pub use article::Article;
pub use feature_card::FeatureCard;
pub use footer::FooterBlock;
pub use product::Product;
pub use trade::{CountryTradeRecord, TradeBuckets, TradeRole};
