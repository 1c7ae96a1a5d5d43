//! Static rule catalog.
//!
//! One module per compliance standard plus the vulnerability check database.
//! All patterns are compiled here, once, at load time; a malformed pattern
//! is a fatal load error so the evaluator never sees an uncompiled check.

pub mod dpdp;
pub mod fedramp;
pub mod gdpr;
pub mod hipaa;
pub mod iso27001;
pub mod iso27002;
pub mod nist_csf;
pub mod pci_dss;
pub mod soc2;
pub mod vulnerabilities;

use crate::error::Result;
use crate::models::{Control, ImpactLevel, Standard, VulnerabilityCheck};

/// File types the infrastructure-definition checks apply to.
pub(crate) const IAC_FILE_TYPES: &[&str] = &[".tf", ".yaml", ".yml", ".json"];

/// Immutable registry of all control rules and vulnerability rules.
pub struct Catalog {
    controls: Vec<Control>,
    vulnerability_checks: Vec<VulnerabilityCheck>,
}

impl Catalog {
    /// Load and compile the full catalog.
    pub fn load() -> Result<Self> {
        let mut controls = Vec::new();
        controls.extend(fedramp::controls()?);
        controls.extend(gdpr::controls()?);
        controls.extend(hipaa::controls()?);
        controls.extend(dpdp::controls()?);
        controls.extend(pci_dss::controls()?);
        controls.extend(iso27001::controls()?);
        controls.extend(iso27002::controls()?);
        controls.extend(soc2::controls()?);
        controls.extend(nist_csf::controls()?);

        Ok(Self {
            controls,
            vulnerability_checks: vulnerabilities::checks()?,
        })
    }

    /// All controls belonging to a standard, in catalog order. FedRAMP
    /// callers usually want `controls_in_scope` instead, which applies the
    /// impact-level filter.
    pub fn controls_for(&self, standard: Standard) -> Vec<&Control> {
        self.controls
            .iter()
            .filter(|c| c.standard == standard)
            .collect()
    }

    /// Controls in scope for a scan: the concatenation of each selected
    /// standard's controls, with FedRAMP filtered by impact level.
    pub fn controls_in_scope(
        &self,
        standards: &[Standard],
        level: ImpactLevel,
    ) -> Vec<&Control> {
        let mut in_scope = Vec::new();
        for &standard in standards {
            for control in self.controls.iter().filter(|c| c.standard == standard) {
                if standard == Standard::FedRamp && !control.applies_to_level(level) {
                    continue;
                }
                in_scope.push(control);
            }
        }
        in_scope
    }

    /// Static control count for the coverage denominator.
    pub fn total_controls(&self, standards: &[Standard], level: ImpactLevel) -> usize {
        self.controls_in_scope(standards, level).len()
    }

    pub fn vulnerability_checks(&self) -> &[VulnerabilityCheck] {
        &self.vulnerability_checks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.controls_for(Standard::FedRamp).is_empty());
        assert!(!catalog.vulnerability_checks().is_empty());
    }

    #[test]
    fn test_every_standard_has_controls() {
        let catalog = Catalog::load().unwrap();
        for standard in Standard::all() {
            assert!(
                !catalog.controls_for(standard).is_empty(),
                "no controls for {}",
                standard.as_str()
            );
        }
    }

    #[test]
    fn test_fedramp_level_filter() {
        let catalog = Catalog::load().unwrap();
        let low = catalog.controls_in_scope(&[Standard::FedRamp], ImpactLevel::Low);
        let moderate = catalog.controls_in_scope(&[Standard::FedRamp], ImpactLevel::Moderate);
        // Moderate adds controls (AU-4, SC-28) on top of the Low baseline.
        assert!(low.len() < moderate.len());
        assert!(low.iter().all(|c| c.applies_to_level(ImpactLevel::Low)));
    }

    #[test]
    fn test_total_controls_sums_standards() {
        let catalog = Catalog::load().unwrap();
        let fedramp = catalog.total_controls(&[Standard::FedRamp], ImpactLevel::Moderate);
        let gdpr = catalog.total_controls(&[Standard::Gdpr], ImpactLevel::Moderate);
        let both = catalog.total_controls(
            &[Standard::FedRamp, Standard::Gdpr],
            ImpactLevel::Moderate,
        );
        assert_eq!(both, fedramp + gdpr);
    }

    #[test]
    fn test_control_ids_unique() {
        let catalog = Catalog::load().unwrap();
        let mut seen = std::collections::HashSet::new();
        for control in catalog.controls_in_scope(&Standard::all(), ImpactLevel::High) {
            assert!(seen.insert(control.id.clone()), "duplicate id {}", control.id);
        }
    }
}
