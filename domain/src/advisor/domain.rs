//! Subject-matter domains and their fixed lexicons

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A subject-matter domain an advisor belongs to.
///
/// The set is fixed: each domain owns a keyword dictionary (used both for
/// question classification and persona derivation) and a persona tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Clinical,
    Education,
    Remedies,
    Product,
}

impl Domain {
    /// All domains, in canonical order
    pub const ALL: [Domain; 4] = [
        Domain::Clinical,
        Domain::Education,
        Domain::Remedies,
        Domain::Product,
    ];

    /// The persona tone used when responding on behalf of this domain
    pub fn tone(&self) -> &'static str {
        match self {
            Domain::Clinical => "precise and evidence-based",
            Domain::Education => "encouraging and explanatory",
            Domain::Remedies => "warm and holistic",
            Domain::Product => "pragmatic and commercially minded",
        }
    }

    /// The keyword dictionary owned by this domain.
    ///
    /// Tokens are lowercase and longer than three characters, matching the
    /// output of the analysis tokenizer.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Domain::Clinical => &[
                "clinical",
                "trial",
                "trials",
                "patient",
                "patients",
                "dosage",
                "regulatory",
                "efficacy",
                "safety",
                "treatment",
                "symptom",
                "symptoms",
                "diagnosis",
                "therapy",
                "medication",
                "protocol",
                "adverse",
                "pharmacology",
                "biomarker",
            ],
            Domain::Education => &[
                "education",
                "educational",
                "curriculum",
                "learning",
                "teaching",
                "student",
                "students",
                "course",
                "courses",
                "lesson",
                "lessons",
                "workshop",
                "training",
                "classroom",
                "pedagogy",
                "literacy",
                "assessment",
                "mentoring",
            ],
            Domain::Remedies => &[
                "herbal",
                "remedy",
                "remedies",
                "natural",
                "supplement",
                "supplements",
                "holistic",
                "wellness",
                "tincture",
                "botanical",
                "naturopathic",
                "ayurvedic",
                "aromatherapy",
                "nutrition",
                "infusion",
            ],
            Domain::Product => &[
                "product",
                "launch",
                "market",
                "marketing",
                "strategy",
                "revenue",
                "pricing",
                "brand",
                "branding",
                "customer",
                "customers",
                "growth",
                "roadmap",
                "feature",
                "features",
                "startup",
                "sales",
                "positioning",
                "audience",
            ],
        }
    }

    /// Whether `token` belongs to this domain's dictionary
    pub fn contains(&self, token: &str) -> bool {
        self.keywords().contains(&token)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Clinical => write!(f, "clinical"),
            Domain::Education => write!(f, "education"),
            Domain::Remedies => write!(f, "remedies"),
            Domain::Product => write!(f, "product"),
        }
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clinical" => Ok(Domain::Clinical),
            "education" => Ok(Domain::Education),
            "remedies" => Ok(Domain::Remedies),
            "product" => Ok(Domain::Product),
            other => Err(format!("unknown domain: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_roundtrip() {
        for domain in Domain::ALL {
            let parsed: Domain = domain.to_string().parse().unwrap();
            assert_eq!(parsed, domain);
        }
    }

    #[test]
    fn test_unknown_domain_rejected() {
        assert!("astrology".parse::<Domain>().is_err());
    }

    #[test]
    fn test_every_domain_has_tone_and_keywords() {
        for domain in Domain::ALL {
            assert!(!domain.tone().is_empty());
            assert!(domain.keywords().len() > 5);
        }
    }

    #[test]
    fn test_dictionary_membership() {
        assert!(Domain::Product.contains("launch"));
        assert!(Domain::Clinical.contains("dosage"));
        assert!(!Domain::Education.contains("launch"));
    }
}
