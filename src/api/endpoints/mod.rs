pub mod alerts;
pub mod health;
pub mod patients;
pub mod simulation;
