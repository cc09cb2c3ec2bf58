pub mod calibration;
pub mod driver;
pub mod input;
