use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub skill_readiness: i64,
    pub verified_skills: i64,
    pub total_xp: i64,
    pub certifications: i64,
}

impl Profile {
    pub fn stats(&self) -> ProfileStats {
        ProfileStats {
            skill_readiness: self.skill_readiness,
            verified_skills: self.verified_skills,
            total_xp: self.total_xp,
            certifications: self.certifications,
        }
    }
}

/// The gamification metrics as exposed over the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub skill_readiness: i64,
    pub verified_skills: i64,
    pub total_xp: i64,
    pub certifications: i64,
}

impl ProfileStats {
    /// Shown on the dashboard to visitors without a session
    pub const PLACEHOLDER: ProfileStats = ProfileStats {
        skill_readiness: 87,
        verified_skills: 12,
        total_xp: 2450,
        certifications: 5,
    };
}

/// Stats of a user whose profile row may be missing; a missing one renders as `{}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaybeStats(pub Option<ProfileStats>);

impl From<Option<ProfileStats>> for MaybeStats {
    fn from(stats: Option<ProfileStats>) -> Self {
        MaybeStats(stats)
    }
}

impl Serialize for MaybeStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(stats) => stats.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Partial profile update; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileUpdate {
    pub skill_readiness: Option<i64>,
    pub verified_skills: Option<i64>,
    pub total_xp: Option<i64>,
    pub certifications: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_stats_serialize_as_empty_object() {
        let value = serde_json::to_value(MaybeStats(None)).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn present_stats_serialize_flat() {
        let value = serde_json::to_value(MaybeStats(Some(ProfileStats::PLACEHOLDER))).unwrap();
        assert_eq!(
            value,
            json!({
                "skill_readiness": 87,
                "verified_skills": 12,
                "total_xp": 2450,
                "certifications": 5
            })
        );
    }

    #[test]
    fn partial_update_leaves_other_fields_unset() {
        let update: ProfileUpdate = serde_json::from_value(json!({ "total_xp": 300 })).unwrap();
        assert_eq!(update.total_xp, Some(300));
        assert_eq!(update.skill_readiness, None);
        assert_eq!(update.verified_skills, None);
        assert_eq!(update.certifications, None);
    }
}
