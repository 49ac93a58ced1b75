pub mod availability;
pub mod booking;
pub mod provider;
pub mod settings;
pub mod transaction;

pub use availability::TimeSlot;
pub use booking::{Booking, BookingStatus};
pub use provider::{ProfileDetails, ProfileUpdate, Provider, ProviderUpdate, UpdateError};
pub use settings::{AccountSettings, NotificationPreferences, SettingKey, Settings};
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
