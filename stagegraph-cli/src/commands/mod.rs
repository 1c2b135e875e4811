pub mod combine;
pub mod generate;
pub mod run;
pub mod validate;
