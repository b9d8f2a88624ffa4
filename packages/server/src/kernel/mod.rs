//! Kernel module - server infrastructure and dependencies.

pub mod content_cache;
pub mod drupal_source;
pub mod test_dependencies;
pub mod traits;

pub use content_cache::{CachedContentSource, DEFAULT_REVALIDATE};
pub use drupal_source::DrupalContentSource;
pub use test_dependencies::{ContentCall, MockContentSource};
pub use traits::*;
