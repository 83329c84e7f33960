pub mod activities;

pub use activities::ActivityCatalogRow;
