//! Internal content proxy.
//!
//! `GET /api/content?type=<kind>` fetches the upstream collection for a
//! content kind, normalizes it and returns the view models.
//! `GET /api/content/:type/:id` does the same for a single item.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use content::{
    fallback_trade, normalize::normalize_article, normalize::normalize_feature_card,
    normalize::normalize_product, normalize_first, Article, ContentKind, FeatureCard, FooterBlock,
    Product, TradeBuckets,
};
use drupal_client::{Document, PrimaryData};
use serde::{Deserialize, Serialize};

use crate::kernel::FetchError;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Normalized collection, keyed by kind
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentPayload {
    FeatureCards(Vec<FeatureCard>),
    Products(Vec<Product>),
    Articles(Vec<Article>),
    Footer(Option<FooterBlock>),
    #[serde(untagged)]
    ClothingTrade(TradePayload),
}

/// Trade buckets; `fallback` is set when the built-in dataset is shown
#[derive(Debug, Serialize)]
pub struct TradePayload {
    #[serde(flatten)]
    pub data: TradeBuckets,
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub success: bool,
    #[serde(flatten)]
    pub payload: ContentPayload,
}

/// A single normalized item, keyed by kind
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemPayload {
    FeatureCard(FeatureCard),
    Product(Product),
    Article(Article),
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub success: bool,
    #[serde(flatten)]
    pub payload: ItemPayload,
}

fn parse_kind(value: &str) -> Result<ContentKind, ApiError> {
    value
        .parse::<ContentKind>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

pub async fn content_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<ContentQuery>,
) -> Result<Json<ContentResponse>, ApiError> {
    let kind = query
        .kind
        .as_deref()
        .ok_or_else(|| ApiError::BadRequest("missing `type` query parameter".to_string()))
        .and_then(parse_kind)?;

    let origin = &state.origin;
    let payload = match kind {
        ContentKind::ClothingTrade => trade_payload(&state).await,
        ContentKind::FeatureCards => {
            let document = fetch_collection(&state, kind).await?;
            ContentPayload::FeatureCards(content::feature_cards(&document, origin))
        }
        ContentKind::Products => {
            let document = fetch_collection(&state, kind).await?;
            ContentPayload::Products(content::products(&document, origin))
        }
        ContentKind::Articles => {
            let document = fetch_collection(&state, kind).await?;
            ContentPayload::Articles(content::articles(&document, origin))
        }
        ContentKind::Footer => {
            let document = fetch_collection(&state, kind).await?;
            ContentPayload::Footer(content::footer(&document, origin))
        }
    };

    tracing::debug!(kind = %kind, "Served content");
    Ok(Json(ContentResponse {
        success: true,
        payload,
    }))
}

/// Fetch a collection document, treating an envelope whose `data` is not a
/// list as a failed fetch. The footer also accepts a single resource.
async fn fetch_collection(state: &AppState, kind: ContentKind) -> Result<Arc<Document>, FetchError> {
    let document = state.content.fetch(kind).await?;
    let well_formed = match &document.data {
        PrimaryData::Many(_) => true,
        PrimaryData::One(_) => kind == ContentKind::Footer,
        PrimaryData::Malformed(_) => false,
    };

    if well_formed {
        Ok(document)
    } else {
        Err(FetchError::MalformedDocument(kind))
    }
}

/// Live trade data, or the built-in dataset when fetching or parsing fails.
async fn trade_payload(state: &AppState) -> ContentPayload {
    let live = match fetch_collection(state, ContentKind::ClothingTrade).await {
        Ok(document) => content::trade(&document).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match live {
        Ok(data) => ContentPayload::ClothingTrade(TradePayload {
            data,
            fallback: false,
        }),
        Err(error) => {
            tracing::warn!(error = %error, "Serving fallback trade data");
            ContentPayload::ClothingTrade(TradePayload {
                data: fallback_trade(),
                fallback: true,
            })
        }
    }
}

pub async fn content_item_handler(
    Extension(state): Extension<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<ItemResponse>, ApiError> {
    let kind = parse_kind(&kind)?;
    if !kind.supports_item_lookup() {
        return Err(ApiError::BadRequest(format!(
            "{} items cannot be fetched by id",
            kind
        )));
    }

    if !is_plain_id(&id) {
        return Err(ApiError::BadRequest(format!("invalid {} id", kind)));
    }

    let not_found = || ApiError::NotFound(format!("{} not found", item_label(kind)));
    let document = match state.content.fetch_item(kind, &id).await {
        Ok(document) => document,
        Err(e) if e.is_not_found() => return Err(not_found()),
        Err(e) => return Err(e.into()),
    };

    let origin = &state.origin;
    let payload = match kind {
        ContentKind::FeatureCards => normalize_first(&document, |r, included| {
            ItemPayload::FeatureCard(normalize_feature_card(r, included, origin))
        }),
        ContentKind::Products => normalize_first(&document, |r, included| {
            ItemPayload::Product(normalize_product(r, included, origin))
        }),
        ContentKind::Articles => normalize_first(&document, |r, included| {
            ItemPayload::Article(normalize_article(r, included, origin))
        }),
        ContentKind::ClothingTrade | ContentKind::Footer => None,
    }
    .ok_or_else(not_found)?;

    Ok(Json(ItemResponse {
        success: true,
        payload,
    }))
}

/// Drupal ids (UUIDs, serial numbers) are a single run of ASCII letters,
/// digits, `-` and `_`.
fn is_plain_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn item_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::FeatureCards => "Feature card",
        ContentKind::Products => "Product",
        ContentKind::Articles => "Article",
        ContentKind::ClothingTrade => "Trade record",
        ContentKind::Footer => "Footer",
    }
}
