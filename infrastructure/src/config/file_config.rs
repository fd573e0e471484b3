//! File-backed configuration schema

use panel_application::ServiceConfig;
use panel_domain::{Advisor, Domain};
use serde::{Deserialize, Serialize};

/// One advisor as declared in a config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorEntry {
    pub id: String,
    pub name: String,
    pub expertise: String,
    #[serde(default)]
    pub background: String,
    pub domain: Domain,
}

impl AdvisorEntry {
    pub fn into_advisor(self) -> Advisor {
        Advisor::new(
            self.id,
            self.name,
            self.expertise,
            self.background,
            self.domain,
        )
    }
}

/// The advisor roster section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    pub advisors: Vec<AdvisorEntry>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            advisors: vec![
                AdvisorEntry {
                    id: "adv-clinical".into(),
                    name: "Dr. Amara Okafor".into(),
                    expertise: "Clinical research and regulatory strategy".into(),
                    background: "Fifteen years designing and running phase II/III trials".into(),
                    domain: Domain::Clinical,
                },
                AdvisorEntry {
                    id: "adv-education".into(),
                    name: "Leah Brandt".into(),
                    expertise: "Curriculum design and adult learning".into(),
                    background: "Built certification programs for three universities".into(),
                    domain: Domain::Education,
                },
                AdvisorEntry {
                    id: "adv-remedies".into(),
                    name: "Maya Lindholm".into(),
                    expertise: "Herbal remedies and holistic wellness".into(),
                    background: "Practicing clinical herbalist and educator".into(),
                    domain: Domain::Remedies,
                },
                AdvisorEntry {
                    id: "adv-product".into(),
                    name: "Iris Chen".into(),
                    expertise: "Product strategy and market positioning".into(),
                    background: "Took three consumer health products to launch".into(),
                    domain: Domain::Product,
                },
            ],
        }
    }
}

/// Complete file configuration: roster plus service tuning
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub panel: PanelConfig,
    pub service: ServiceConfig,
}

impl FileConfig {
    /// Materialize the roster into domain advisors
    pub fn advisors(&self) -> Vec<Advisor> {
        self.panel
            .advisors
            .iter()
            .cloned()
            .map(AdvisorEntry::into_advisor)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_covers_every_domain() {
        let config = FileConfig::default();
        for domain in Domain::ALL {
            assert!(
                config.panel.advisors.iter().any(|a| a.domain == domain),
                "missing default advisor for {domain}"
            );
        }
    }

    #[test]
    fn test_roster_parses_from_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [[panel.advisors]]
            id = "adv-1"
            name = "Ana"
            expertise = "clinical trials"
            domain = "clinical"

            [service]
            timeout_ms = 5000
            "#,
        )
        .unwrap();
        assert_eq!(config.panel.advisors.len(), 1);
        assert_eq!(config.panel.advisors[0].domain, Domain::Clinical);
        assert_eq!(config.service.timeout_ms, 5_000);
        // Unset service fields fall back to defaults
        assert_eq!(config.service.retry_attempts, 3);
    }
}
