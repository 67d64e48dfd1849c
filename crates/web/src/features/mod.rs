pub mod athletes;
pub mod categories;
pub mod health;
pub mod training_centers;
