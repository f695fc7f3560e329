/// Grid driver evaluating every pixel in scan order
pub mod driver;
/// Center-pixel normalization
pub mod normalization;
/// Series weights and per-pixel accumulation
pub mod series;
