//! Profile-based scheme recommendations

use serde::{Deserialize, Serialize};

/// Schemes recommended once a profile is complete
pub const RECOMMENDED_SCHEMES: [&str; 5] = [
    "Pradhan Mantri Jan Dhan Yojana (PMJDY)",
    "Skill India Mission",
    "Pradhan Mantri Awas Yojana (PMAY)",
    "Ayushman Bharat Pradhan Mantri Jan Arogya Yojana (AB-PMJAY)",
    "National Apprenticeship Promotion Scheme (NAPS)",
];

/// Self-described user profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub economic_status: String,
}

impl UserProfile {
    /// All four fields filled in
    pub fn is_complete(&self) -> bool {
        [
            &self.age,
            &self.gender,
            &self.qualification,
            &self.economic_status,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// Recommended schemes for a profile; empty until the profile is complete
pub fn recommend(profile: &UserProfile) -> Vec<&'static str> {
    if profile.is_complete() {
        RECOMMENDED_SCHEMES.to_vec()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemescope_core::Catalog;

    #[test]
    fn test_incomplete_profile() {
        let profile = UserProfile {
            age: "34".into(),
            gender: "female".into(),
            ..Default::default()
        };
        assert!(recommend(&profile).is_empty());
    }

    #[test]
    fn test_complete_profile() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"age": "34", "gender": "female", "qualification": "graduate", "economicStatus": "bpl"}"#,
        )
        .unwrap();
        let recommendations = recommend(&profile);
        assert_eq!(recommendations.len(), 5);
        assert_eq!(recommendations[0], "Pradhan Mantri Jan Dhan Yojana (PMJDY)");
    }

    #[test]
    fn test_recommendations_are_catalogued() {
        let catalog = Catalog::bundled();
        assert!(RECOMMENDED_SCHEMES.iter().all(|name| catalog.contains(name)));
    }
}
