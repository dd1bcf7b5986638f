use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::advisory::{AdvisoryThresholds, FeatureSet};
use crate::error::Result;

/// Preset advisory behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryProfile {
    /// Nutrition only.
    Basic,
    /// Nutrition and sensory feedback, cooling aftertaste above 4%.
    History,
    /// Nutrition, sensory feedback and substitution advice, cooling aftertaste above 6%.
    #[default]
    Suggested,
}

impl AdvisoryProfile {
    pub fn features(self) -> FeatureSet {
        match self {
            AdvisoryProfile::Basic => FeatureSet::NONE,
            AdvisoryProfile::History => FeatureSet {
                feedback: true,
                substitution: false,
            },
            AdvisoryProfile::Suggested => FeatureSet::ALL,
        }
    }

    pub fn thresholds(self) -> AdvisoryThresholds {
        match self {
            AdvisoryProfile::History => AdvisoryThresholds::strict_cooling(),
            AdvisoryProfile::Basic | AdvisoryProfile::Suggested => AdvisoryThresholds::default(),
        }
    }
}

/// On-disk settings; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    profile: Option<AdvisoryProfile>,
    /// Partial feature switches, layered over the profile's features.
    features: serde_json::Map<String, serde_json::Value>,
    /// Partial threshold overrides, layered over the profile's values.
    thresholds: serde_json::Map<String, serde_json::Value>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub profile: AdvisoryProfile,
    pub features: FeatureSet,
    pub thresholds: AdvisoryThresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_profile(AdvisoryProfile::default())
    }
}

impl Settings {
    pub fn for_profile(profile: AdvisoryProfile) -> Self {
        Self {
            profile,
            features: profile.features(),
            thresholds: profile.thresholds(),
        }
    }

    /// Resolve settings from an optional JSON file and an optional profile override.
    ///
    /// Precedence: `profile_override`, then the file's profile, then the default.
    /// Feature switches in the file only apply without a `profile_override`;
    /// threshold overrides always apply on top of the chosen profile.
    pub fn load(path: Option<&Path>, profile_override: Option<AdvisoryProfile>) -> Result<Self> {
        let file = match path {
            Some(p) => {
                let content = fs::read_to_string(p)?;
                serde_json::from_str::<SettingsFile>(&content)?
            }
            None => SettingsFile::default(),
        };

        let profile = profile_override.or(file.profile).unwrap_or_default();
        let mut settings = Self::for_profile(profile);

        if profile_override.is_none() {
            settings.features = overlay(&settings.features, file.features)?;
        }
        settings.thresholds = overlay(&settings.thresholds, file.thresholds)?;

        debug!(?settings, "settings resolved");
        Ok(settings)
    }
}

/// Replace the fields of `base` named in `overrides`, keeping the rest.
fn overlay<T: Serialize + DeserializeOwned>(
    base: &T,
    overrides: serde_json::Map<String, serde_json::Value>,
) -> Result<T> {
    let mut merged = serde_json::to_value(base)?;
    if let serde_json::Value::Object(map) = &mut merged {
        map.extend(overrides);
    }
    Ok(serde_json::from_value(merged)?)
}
