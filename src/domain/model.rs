use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Harvesting integration a journal is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemType {
    #[serde(rename = "OJS_OAI")]
    OjsOai,
    #[serde(rename = "TECKIZ")]
    Teckiz,
    #[serde(rename = "DOAJ")]
    Doaj,
}

impl SystemType {
    pub const ALL: [SystemType; 3] = [SystemType::OjsOai, SystemType::Teckiz, SystemType::Doaj];

    /// Tag carried in the message body and the `system_type` attribute.
    pub fn tag(&self) -> &'static str {
        match self {
            SystemType::OjsOai => "OJS_OAI",
            SystemType::Teckiz => "TECKIZ",
            SystemType::Doaj => "DOAJ",
        }
    }

    pub fn action(&self) -> HarvestAction {
        match self {
            SystemType::OjsOai => HarvestAction::HarvestOai,
            SystemType::Teckiz => HarvestAction::HarvestTeckiz,
            SystemType::Doaj => HarvestAction::HarvestDoaj,
        }
    }

    /// Value stored in the journal setting's `journal_system` column.
    pub fn setting_value(&self) -> &'static str {
        match self {
            SystemType::OjsOai => "ojs-oai",
            SystemType::Teckiz => "teckiz",
            SystemType::Doaj => "doaj",
        }
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSystem(pub String);

impl fmt::Display for UnknownSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown journal system '{}'", self.0)
    }
}

impl std::error::Error for UnknownSystem {}

impl FromStr for SystemType {
    type Err = UnknownSystem;

    /// 同時接受資料庫中的設定值 (ojs-oai) 與訊息標籤 (OJS_OAI)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        SystemType::ALL
            .into_iter()
            .find(|system| {
                value.eq_ignore_ascii_case(system.setting_value())
                    || value.eq_ignore_ascii_case(system.tag())
            })
            .ok_or_else(|| UnknownSystem(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarvestAction {
    HarvestOai,
    HarvestTeckiz,
    HarvestDoaj,
}

impl HarvestAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            HarvestAction::HarvestOai => "harvest_oai",
            HarvestAction::HarvestTeckiz => "harvest_teckiz",
            HarvestAction::HarvestDoaj => "harvest_doaj",
        }
    }
}

impl fmt::Display for HarvestAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalSetting {
    system: String,
}

impl JournalSetting {
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
        }
    }

    /// Raw value as stored by the persistence layer.
    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn has_system(&self) -> bool {
        !self.system.trim().is_empty()
    }

    pub fn system_type(&self) -> Result<SystemType, UnknownSystem> {
        self.system.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    id: i64,
    website: String,
    #[serde(default)]
    setting: Option<JournalSetting>,
}

impl Journal {
    pub fn new(id: i64, website: impl Into<String>) -> Self {
        Self {
            id,
            website: website.into(),
            setting: None,
        }
    }

    pub fn with_setting(mut self, setting: JournalSetting) -> Self {
        self.setting = Some(setting);
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn setting(&self) -> Option<&JournalSetting> {
        self.setting.as_ref()
    }

    pub fn journal_key(&self) -> String {
        self.id.to_string()
    }
}

/// Body published to the harvest queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarvestMessage {
    pub url: String,
    pub journal_key: String,
    pub system_type: SystemType,
    pub action: HarvestAction,
}

impl HarvestMessage {
    pub fn for_journal(system_type: SystemType, journal: &Journal) -> Self {
        Self {
            url: journal.website().to_string(),
            journal_key: journal.journal_key(),
            system_type,
            action: system_type.action(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// String attributes duplicated from the body so consumers can filter
    /// without decoding it.
    pub fn attributes(&self) -> Vec<(String, String)> {
        vec![
            ("system_type".to_string(), self.system_type.tag().to_string()),
            ("action".to_string(), self.action.as_str().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_system_type() {
        assert_eq!("ojs-oai".parse::<SystemType>().unwrap(), SystemType::OjsOai);
        assert_eq!("OJS_OAI".parse::<SystemType>().unwrap(), SystemType::OjsOai);
        assert_eq!(" Teckiz ".parse::<SystemType>().unwrap(), SystemType::Teckiz);
        assert_eq!("doaj".parse::<SystemType>().unwrap(), SystemType::Doaj);
        assert_eq!(
            "ojs".parse::<SystemType>(),
            Err(UnknownSystem("ojs".to_string()))
        );
    }

    #[test]
    fn test_actions_match_system() {
        assert_eq!(SystemType::OjsOai.action().as_str(), "harvest_oai");
        assert_eq!(SystemType::Teckiz.action().as_str(), "harvest_teckiz");
        assert_eq!(SystemType::Doaj.action().as_str(), "harvest_doaj");
    }

    #[test]
    fn test_message_body_has_exactly_four_fields() {
        let journal = Journal::new(42, "https://journal.example.org")
            .with_setting(JournalSetting::new("doaj"));
        let message = HarvestMessage::for_journal(SystemType::Doaj, &journal);

        let body = message.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["url"], "https://journal.example.org");
        assert_eq!(object["journal_key"], "42");
        assert_eq!(object["system_type"], "DOAJ");
        assert_eq!(object["action"], "harvest_doaj");

        let decoded: HarvestMessage = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_attributes_mirror_body() {
        let journal = Journal::new(7, "https://teckiz.example.com");
        let message = HarvestMessage::for_journal(SystemType::Teckiz, &journal);

        assert_eq!(
            message.attributes(),
            vec![
                ("system_type".to_string(), "TECKIZ".to_string()),
                ("action".to_string(), "harvest_teckiz".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_system_is_reported() {
        assert!(!JournalSetting::new("   ").has_system());
        assert!(JournalSetting::new("ojs-oai").has_system());
    }

    #[test]
    fn test_journal_deserializes_without_setting() {
        let journal: Journal =
            serde_json::from_str(r#"{"id": 9, "website": "https://a.example"}"#).unwrap();
        assert!(journal.setting().is_none());
        assert_eq!(journal.journal_key(), "9");
    }
}
