use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Raised when a store-format tag falls outside the closed enumeration.
///
/// Unreachable through typed code paths; it surfaces only when parsing
/// imported or hand-edited state files.
#[derive(Debug, Error)]
#[error("unsupported store format: {0}")]
pub struct FormatParseError(pub String);

/// The closed set of upstream feed formats. Each variant selects exactly one
/// normalizer; adding a store means adding a variant here and a normalizer
/// in nolasales-feeds, where the dispatch `match` is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreFormat {
    BreauxMart,
    RobertFresh,
    Zuppardos,
    Dorignacs,
    Rouses,
    WinnDixie,
}

impl StoreFormat {
    pub const ALL: [StoreFormat; 6] = [
        StoreFormat::BreauxMart,
        StoreFormat::RobertFresh,
        StoreFormat::Zuppardos,
        StoreFormat::Dorignacs,
        StoreFormat::Rouses,
        StoreFormat::WinnDixie,
    ];

    /// The kebab-case tag used in persisted state files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StoreFormat::BreauxMart => "breaux-mart",
            StoreFormat::RobertFresh => "robert-fresh",
            StoreFormat::Zuppardos => "zuppardos",
            StoreFormat::Dorignacs => "dorignacs",
            StoreFormat::Rouses => "rouses",
            StoreFormat::WinnDixie => "winn-dixie",
        }
    }
}

impl std::fmt::Display for StoreFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StoreFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breaux-mart" => Ok(StoreFormat::BreauxMart),
            "robert-fresh" => Ok(StoreFormat::RobertFresh),
            "zuppardos" => Ok(StoreFormat::Zuppardos),
            "dorignacs" => Ok(StoreFormat::Dorignacs),
            "rouses" => Ok(StoreFormat::Rouses),
            "winn-dixie" => Ok(StoreFormat::WinnDixie),
            other => Err(FormatParseError(other.to_owned())),
        }
    }
}

impl Serialize for StoreFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StoreFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// Admin-managed configuration for one store endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Stable key; never changes after seeding.
    pub id: String,
    /// Display name, also the key for this store's sale listing.
    pub name: String,
    /// Feed endpoint. Empty until configured by the admin.
    #[serde(default)]
    pub api_url: String,
    #[serde(rename = "dataType")]
    pub format: StoreFormat,
    /// Gate for inclusion in bulk refresh.
    pub is_active: bool,
    /// Stamped after each successful fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl StoreConfig {
    /// Whether bulk refresh should include this store.
    #[must_use]
    pub fn is_fetchable(&self) -> bool {
        self.is_active && !self.api_url.is_empty()
    }
}

/// The fixed six-store seed used on first run. All stores start active with
/// no endpoint configured.
#[must_use]
pub fn default_store_configs() -> Vec<StoreConfig> {
    let seed: [(&str, &str, StoreFormat); 6] = [
        ("breaux-mart", "Breaux Mart", StoreFormat::BreauxMart),
        ("robert-fresh", "Robert Fresh Market", StoreFormat::RobertFresh),
        ("zuppardos", "Zuppardo's", StoreFormat::Zuppardos),
        ("dorignacs", "Dorignac's", StoreFormat::Dorignacs),
        ("rouses", "Rouses", StoreFormat::Rouses),
        ("winn-dixie", "Winn-Dixie", StoreFormat::WinnDixie),
    ];
    seed.into_iter()
        .map(|(id, name, format)| StoreConfig {
            id: id.to_owned(),
            name: name.to_owned(),
            api_url: String::new(),
            format,
            is_active: true,
            last_updated: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tags_roundtrip_through_from_str() {
        for format in StoreFormat::ALL {
            let parsed: StoreFormat = format.as_str().parse().unwrap();
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn format_unknown_tag_is_an_error() {
        let err = "piggly-wiggly".parse::<StoreFormat>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported store format: piggly-wiggly");
    }

    #[test]
    fn format_serializes_as_kebab_case_tag() {
        let json = serde_json::to_string(&StoreFormat::BreauxMart).unwrap();
        assert_eq!(json, "\"breaux-mart\"");
    }

    #[test]
    fn format_deserialize_rejects_unknown_tag() {
        let result: Result<StoreFormat, _> = serde_json::from_str("\"kroger\"");
        assert!(result.is_err());
    }

    #[test]
    fn store_config_uses_data_type_field_name() {
        let config = default_store_configs().remove(0);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["dataType"], "breaux-mart");
        assert_eq!(json["apiUrl"], "");
        assert_eq!(json["isActive"], true);
        assert!(json.get("lastUpdated").is_none());
    }

    #[test]
    fn default_configs_cover_all_six_stores() {
        let configs = default_store_configs();
        assert_eq!(configs.len(), 6);
        assert!(configs.iter().all(|c| c.is_active));
        assert!(configs.iter().all(|c| c.api_url.is_empty()));
        let ids: Vec<&str> = configs.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "breaux-mart",
                "robert-fresh",
                "zuppardos",
                "dorignacs",
                "rouses",
                "winn-dixie"
            ]
        );
    }

    #[test]
    fn fetchable_requires_active_and_url() {
        let mut config = default_store_configs().remove(0);
        assert!(!config.is_fetchable());
        config.api_url = "https://example.com/feed.json".to_owned();
        assert!(config.is_fetchable());
        config.is_active = false;
        assert!(!config.is_fetchable());
    }
}
