use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_verified: bool,
    pub is_online: bool,
    pub wallet_balance: f64,
}

/// Editable profile details shown alongside the provider record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileDetails {
    pub address: String,
    pub bio: String,
    pub specialties: Vec<String>,
    pub qualifications: Vec<String>,
    pub languages: Vec<String>,
    pub experience: String,
    pub rate: String,
}

/// Partial update for the provider's identity fields. Anything not listed
/// here (verification, online flag, balance) can't be changed through it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileUpdate {
    pub address: Option<String>,
    pub bio: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub qualifications: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub experience: Option<String>,
    pub rate: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum UpdateError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

impl Provider {
    pub fn toggle_online(&mut self) -> bool {
        self.is_online = !self.is_online;
        self.is_online
    }

    /// Validates the whole update before touching any field.
    pub fn apply(&mut self, update: ProviderUpdate) -> Result<(), UpdateError> {
        if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(UpdateError::Empty("name"));
        }
        if update.email.as_deref().is_some_and(|e| e.trim().is_empty()) {
            return Err(UpdateError::Empty("email"));
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        Ok(())
    }
}

impl ProfileDetails {
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(bio) = update.bio {
            self.bio = bio;
        }
        if let Some(specialties) = update.specialties {
            self.specialties = specialties;
        }
        if let Some(qualifications) = update.qualifications {
            self.qualifications = qualifications;
        }
        if let Some(languages) = update.languages {
            self.languages = languages;
        }
        if let Some(experience) = update.experience {
            self.experience = experience;
        }
        if let Some(rate) = update.rate {
            self.rate = rate;
        }
    }
}
