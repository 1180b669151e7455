//! Reusable UI components for the dashboard

pub mod alert;
pub mod card;
pub mod value_card;

pub use alert::show_alert;
pub use card::show_card;
pub use value_card::ValueCard;
