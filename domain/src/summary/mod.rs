//! Cross-advisor summary synthesis

pub mod insights;
pub mod synthesizer;

pub use insights::{Theme, detect_common_themes, extract_key_insights, infer_domain_label, unique_perspectives};
pub use synthesizer::SummarySynthesizer;
