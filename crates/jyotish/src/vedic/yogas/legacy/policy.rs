//! Strength policy for legacy findings.
//!
//! Every legacy rule takes its strength from this one table so the choices
//! can be read and adjusted in a single place.

use crate::vedic::yogas::types::Strength;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyRule {
    KendraTrikonaLords,
    DharmaKarmadhipati,
    Yogakaraka,
    DhanaLordConjunction,
    DhanaLordExchangePlacement,
    DhanaLordDignified,
    LakshmiNinthLord,
    VasumatiFromMoon,
    PlanetConjunction,
    PlanetInHouse,
    BhavaLordFavourable,
    BhavaLordDusthana,
    MahaParivartana,
    KhalaParivartana,
    DainyaParivartana,
    DebilitatedLagnaLord,
    DebilitatedMoonSignLord,
    MaleficsInDusthanas,
    Grahan,
    Papakartari,
    GrahaDrishti,
    PlanetInNakshatra,
}

pub const STRENGTH_POLICY: &[(LegacyRule, Strength)] = &[
    (LegacyRule::KendraTrikonaLords, Strength::Strong),
    (LegacyRule::DharmaKarmadhipati, Strength::Strong),
    (LegacyRule::Yogakaraka, Strength::Strong),
    (LegacyRule::DhanaLordConjunction, Strength::Moderate),
    (LegacyRule::DhanaLordExchangePlacement, Strength::Moderate),
    (LegacyRule::DhanaLordDignified, Strength::Strong),
    (LegacyRule::LakshmiNinthLord, Strength::Strong),
    (LegacyRule::VasumatiFromMoon, Strength::Moderate),
    (LegacyRule::PlanetConjunction, Strength::Moderate),
    (LegacyRule::PlanetInHouse, Strength::Moderate),
    (LegacyRule::BhavaLordFavourable, Strength::Moderate),
    (LegacyRule::BhavaLordDusthana, Strength::Weak),
    (LegacyRule::MahaParivartana, Strength::Strong),
    (LegacyRule::KhalaParivartana, Strength::Moderate),
    (LegacyRule::DainyaParivartana, Strength::Weak),
    (LegacyRule::DebilitatedLagnaLord, Strength::Strong),
    (LegacyRule::DebilitatedMoonSignLord, Strength::Moderate),
    (LegacyRule::MaleficsInDusthanas, Strength::Moderate),
    (LegacyRule::Grahan, Strength::Moderate),
    (LegacyRule::Papakartari, Strength::Moderate),
    (LegacyRule::GrahaDrishti, Strength::Moderate),
    (LegacyRule::PlanetInNakshatra, Strength::Weak),
];

/// Strength assigned to a legacy rule. Rules missing from the table are moderate.
pub fn policy_strength(rule: LegacyRule) -> Strength {
    STRENGTH_POLICY
        .iter()
        .find(|(r, _)| *r == rule)
        .map(|(_, strength)| *strength)
        .unwrap_or(Strength::Moderate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_policy_has_one_entry_per_rule() {
        let rules: HashSet<_> = STRENGTH_POLICY.iter().map(|(rule, _)| *rule).collect();
        assert_eq!(rules.len(), STRENGTH_POLICY.len());
    }

    #[test]
    fn test_parivartana_strengths() {
        assert_eq!(policy_strength(LegacyRule::MahaParivartana), Strength::Strong);
        assert_eq!(policy_strength(LegacyRule::KhalaParivartana), Strength::Moderate);
        assert_eq!(policy_strength(LegacyRule::DainyaParivartana), Strength::Weak);
    }
}
