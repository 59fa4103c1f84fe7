pub mod capital;
pub mod company;
pub mod filing;
pub mod indicators;
pub mod input;
pub mod report;
pub mod risk;
pub mod roles;
pub mod types;
