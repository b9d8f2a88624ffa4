use serde::{Deserialize, Serialize};

/// Site-wide footer copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterBlock {
    pub site_title: String,
    pub description: String,
    pub credits_note: String,
    pub year_notice: String,
    pub attribution: String,
    pub logo_image_url: Option<String>,
}

impl Default for FooterBlock {
    /// The footer copy the site ships with.
    fn default() -> Self {
        Self {
            site_title: "Rethread".to_string(),
            description: "Transforming the global fashion landscape through sustainable \
                          second-hand clothing trade and data-driven insights."
                .to_string(),
            credits_note: "Made with care for a sustainable future".to_string(),
            year_notice: "Rethread. All rights reserved.".to_string(),
            attribution: "A project for The Or Foundation".to_string(),
            logo_image_url: None,
        }
    }
}
