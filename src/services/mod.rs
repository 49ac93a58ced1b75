pub mod dashboard;
pub mod ledger;
pub mod preferences;
pub mod seed;
pub mod session;
