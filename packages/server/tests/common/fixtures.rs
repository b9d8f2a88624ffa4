use content::testing::{file, file_ref, term, trade_record, user};
use drupal_client::{Document, Resource, ResourceIdentifier};
use serde_json::json;

pub fn product_collection() -> Document {
    Document::collection(
        vec![
            Resource::new("node--product", "p1")
                .with_attribute("title", "Upcycled Denim Collection")
                .with_attribute("field_description", json!({ "value": "Recycled denim." }))
                .with_attribute("field_price", 45)
                .with_relationship(
                    "field_category",
                    ResourceIdentifier::new("taxonomy_term--product_categories", "c1"),
                )
                .with_relationship("field_product_image", file_ref("f1")),
            Resource::new("node--product", "p2")
                .with_attribute("title", "Eco-Friendly T-Shirt")
                .with_attribute("field_price", "25.00"),
        ],
        vec![
            term("taxonomy_term--product_categories", "c1", "Clothing"),
            file("f1", "/sites/default/files/denim.jpg"),
        ],
    )
}

pub fn article(id: &str) -> Resource {
    Resource::new("node--article", id)
        .with_attribute("title", "The Hidden Journey of Donated Clothes")
        .with_attribute("created", "2023-09-12T10:00:00+00:00")
        .with_attribute("body", json!({ "value": "<p>Where do they go?</p>" }))
        .with_relationship("uid", ResourceIdentifier::new("user--user", "u1"))
        .with_relationships(
            "field_tags",
            vec![ResourceIdentifier::new("taxonomy_term--tags", "t1")],
        )
}

pub fn article_document(id: &str) -> Document {
    Document::single(
        article(id),
        vec![
            user("u1", Some("Maya Chen"), None),
            term("taxonomy_term--tags", "t1", "Sustainability"),
        ],
    )
}

pub fn trade_collection() -> Document {
    Document::collection(
        vec![
            trade_record("r1", "Kenya", "receiving", ["185000", "53771300", "2007", "24", "84"]),
            trade_record("s1", "Canada", "sending", ["82000", "38246108", "52051", "14", "3718"]),
        ],
        vec![],
    )
}

pub fn broken_trade_collection() -> Document {
    Document::collection(
        vec![trade_record("r1", "Kenya", "receiving", ["n/a", "53771300", "2007", "24", "84"])],
        vec![],
    )
}

/// What Drupal returns for a denied collection: `errors` and no `data`
pub fn error_document() -> Document {
    serde_json::from_value(json!({ "errors": [{ "status": "403", "title": "Forbidden" }] }))
        .expect("valid document")
}
