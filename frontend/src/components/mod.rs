pub mod modal;
pub mod monetization;
pub mod penguins;
