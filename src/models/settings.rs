use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            sms: true,
            push: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountSettings {
    pub two_factor: bool,
    pub privacy_mode: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub notifications: NotificationPreferences,
    pub account: AccountSettings,
    pub dark_mode: bool,
}

/// A single switch on the settings page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    EmailNotifications,
    SmsNotifications,
    PushNotifications,
    TwoFactor,
    PrivacyMode,
}

impl Settings {
    /// Flips one switch and returns its new value. Dark mode is handled
    /// separately because it is persisted.
    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let flag = match key {
            SettingKey::EmailNotifications => &mut self.notifications.email,
            SettingKey::SmsNotifications => &mut self.notifications.sms,
            SettingKey::PushNotifications => &mut self.notifications.push,
            SettingKey::TwoFactor => &mut self.account.two_factor,
            SettingKey::PrivacyMode => &mut self.account.privacy_mode,
        };
        *flag = !*flag;
        *flag
    }
}
