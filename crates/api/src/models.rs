use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a character. Opaque to this crate: only equality matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub i64);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a user account (a user owns one or more characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The per-character aggregate-inclusion settings a pilot can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateSetting {
    Wallet,
    Lp,
    Sp,
}

impl AggregateSetting {
    /// Parses a wire/setting name. Unknown names yield `None` so callers can
    /// treat them as no-ops instead of errors.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "wallet" => Some(Self::Wallet),
            "lp" => Some(Self::Lp),
            "sp" => Some(Self::Sp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wallet => "wallet",
            Self::Lp => "lp",
            Self::Sp => "sp",
        }
    }
}

impl fmt::Display for AggregateSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One character row of the profile aggregate.
///
/// The backend may omit flags it considers false, so each one defaults.
/// Fields this crate does not model are captured in `extra` and passed
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub character_id: CharacterId,
    #[serde(default)]
    pub include_wallet: bool,
    #[serde(default)]
    pub include_lp: bool,
    #[serde(default)]
    pub include_sp: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Character {
    /// Sets one inclusion flag. The only place the setting-to-field mapping
    /// lives; both copies of a mirrored character go through here.
    pub fn set_inclusion(&mut self, setting: AggregateSetting, value: bool) {
        match setting {
            AggregateSetting::Wallet => self.include_wallet = value,
            AggregateSetting::Lp => self.include_lp = value,
            AggregateSetting::Sp => self.include_sp = value,
        }
    }

    pub fn inclusion(&self, setting: AggregateSetting) -> bool {
        match setting {
            AggregateSetting::Wallet => self.include_wallet,
            AggregateSetting::Lp => self.include_lp,
            AggregateSetting::Sp => self.include_sp,
        }
    }
}

/// The profile aggregate returned by every profile endpoint.
///
/// `active_char` is a denormalized copy of the session's active character;
/// when its id also appears in `characters` the two copies must be kept in
/// sync by whoever mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAggregate {
    /// Characters in server order. An absent list deserializes as empty.
    #[serde(default)]
    pub characters: Vec<Character>,
    pub active_char: Option<Character>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProfileAggregate {
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.character_id == id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_setting_names_round_trip() {
        for setting in [
            AggregateSetting::Wallet,
            AggregateSetting::Lp,
            AggregateSetting::Sp,
        ] {
            assert_eq!(AggregateSetting::from_name(setting.as_str()), Some(setting));
        }
        assert_eq!(AggregateSetting::from_name("isk"), None);
        assert_eq!(AggregateSetting::from_name("Wallet"), None);
        assert_eq!(AggregateSetting::from_name(""), None);
    }

    #[test]
    fn test_set_inclusion_touches_only_the_named_flag() {
        let mut character: Character = serde_json::from_value(serde_json::json!({
            "character_id": 42,
            "include_wallet": true,
            "include_lp": true,
            "include_sp": true
        }))
        .expect("character should parse");

        character.set_inclusion(AggregateSetting::Lp, false);

        assert!(character.include_wallet);
        assert!(!character.include_lp);
        assert!(character.include_sp);
    }

    #[test]
    fn test_omitted_flags_default_to_false() {
        let profile: ProfileAggregate = serde_json::from_value(serde_json::json!({
            "characters": [{ "character_id": 1, "include_wallet": false }],
            "active_char": { "character_id": 1, "include_wallet": false }
        }))
        .expect("profile should parse");

        let character = &profile.characters[0];
        assert!(!character.include_wallet);
        assert!(!character.include_lp);
        assert!(!character.include_sp);
        assert_eq!(
            profile.active_char.as_ref().map(|c| c.character_id),
            Some(CharacterId(1))
        );
    }

    #[test]
    fn test_unmodeled_fields_survive_reserialization() {
        let body = serde_json::json!({
            "characters": [{
                "character_id": 7,
                "include_wallet": true,
                "include_lp": false,
                "include_sp": false,
                "corporation": "Brave Newbies"
            }],
            "active_char": null,
            "settings_version": 3
        });

        let profile: ProfileAggregate =
            serde_json::from_value(body.clone()).expect("profile should parse");
        assert_eq!(
            profile.characters[0].extra.get("corporation"),
            Some(&serde_json::Value::String("Brave Newbies".to_string()))
        );
        assert_eq!(serde_json::to_value(&profile).expect("should serialize"), body);
    }

    #[test]
    fn test_absent_character_list_parses_as_empty() {
        let profile: ProfileAggregate =
            serde_json::from_value(serde_json::json!({ "active_char": null }))
                .expect("profile should parse");
        assert!(profile.characters.is_empty());
        assert!(profile.active_char.is_none());
    }
}
