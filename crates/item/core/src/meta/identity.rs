//! Player identities carried by head-shaped items.

use uuid::Uuid;

/// A known player, identified by account id. The name is a cached hint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerIdentity {
    pub id: Uuid,
    pub name: Option<String>,
}

impl PlayerIdentity {
    pub fn new(id: Uuid) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Signed key/value attached to a profile (for example `textures`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    pub signature: Option<String>,
}

impl ProfileProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            signature: None,
        }
    }

    pub fn signed(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }
}

/// Richer identity than [`PlayerIdentity`]: id and name may each be missing, and
/// the profile may carry properties such as a skin texture.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerProfile {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub properties: Vec<ProfileProperty>,
}

impl PlayerProfile {
    pub const TEXTURES: &'static str = "textures";

    pub fn new(id: Option<Uuid>, name: Option<String>) -> Self {
        Self {
            id,
            name,
            properties: Vec::new(),
        }
    }

    /// Sets a property, replacing any existing property with the same name.
    pub fn with_property(mut self, property: ProfileProperty) -> Self {
        self.properties.retain(|existing| existing.name != property.name);
        self.properties.push(property);
        self
    }

    pub fn property(&self, name: &str) -> Option<&ProfileProperty> {
        self.properties.iter().find(|property| property.name == name)
    }

    pub fn textures(&self) -> Option<&ProfileProperty> {
        self.property(Self::TEXTURES)
    }

    /// The account this profile points at, if its id is known.
    pub fn identity(&self) -> Option<PlayerIdentity> {
        self.id.map(|id| PlayerIdentity {
            id,
            name: self.name.clone(),
        })
    }

    /// A profile is complete when both id and name are known.
    pub fn is_complete(&self) -> bool {
        self.id.is_some() && self.name.is_some()
    }
}

impl From<PlayerIdentity> for PlayerProfile {
    fn from(identity: PlayerIdentity) -> Self {
        Self::new(Some(identity.id), identity.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_property_replaces_by_name() {
        let profile = PlayerProfile::default()
            .with_property(ProfileProperty::new("textures", "a"))
            .with_property(ProfileProperty::new("textures", "b").signed("sig"));

        assert_eq!(profile.properties.len(), 1);
        let textures = profile.textures().unwrap();
        assert_eq!(textures.value, "b");
        assert_eq!(textures.signature.as_deref(), Some("sig"));
    }

    #[test]
    fn identity_converts_to_complete_profile() {
        let identity = PlayerIdentity::new(Uuid::nil()).with_name("Notch");
        let profile = PlayerProfile::from(identity.clone());
        assert!(profile.is_complete());
        assert_eq!(profile.identity(), Some(identity));
        assert!(!PlayerProfile::default().is_complete());
    }
}
