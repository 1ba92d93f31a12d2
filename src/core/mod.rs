pub mod add;
pub mod clear;
pub mod del;
pub mod history;
pub mod log;
