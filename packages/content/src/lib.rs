//! Content normalization for the Rethread site.
//!
//! Turns Drupal JSON:API documents (primary `data` plus an `included`
//! side-table) into flat, UI-ready view models.
//!
//! # Usage
//!
//! ```rust,ignore
//! use content::{products, ContentOrigin};
//!
//! let origin = ContentOrigin::new("http://localhost:8000");
//! let doc = client.get_collection("node/product", &["field_category", "field_product_image"]).await?;
//! for product in products(&doc, &origin) {
//!     println!("{} {}", product.title, product.price);
//! }
//! ```
//!
//! # Modules
//!
//! - [`resolver`] - `(type, id)` relationship resolution over `included`
//! - [`normalize`] - Per-entity normalizers and document-level entry points
//! - [`collection`] - Mapping documents through a single-entity normalizer
//! - [`fallback`] - Built-in trade dataset
//! - [`kinds`] - Content kinds and their upstream routes
//! - [`testing`] - Fixture builders

pub mod collection;
pub mod error;
pub mod fallback;
pub mod html;
pub mod kinds;
pub mod normalize;
pub mod origin;
pub mod resolver;
pub mod testing;
pub mod types;

pub use collection::{normalize_collection, normalize_first, try_normalize_collection};
pub use error::{NormalizeError, Result, UnknownContentKind};
pub use fallback::fallback_trade;
pub use html::strip_tags;
pub use kinds::ContentKind;
pub use normalize::{articles, feature_cards, footer, products, trade};
pub use origin::ContentOrigin;
pub use resolver::{find_included, resolve, resolve_many, Included};
pub use types::{
    Article, CountryTradeRecord, FeatureCard, FooterBlock, Product, TradeBuckets, TradeRole,
};
