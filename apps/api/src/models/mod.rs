pub mod clothing;
pub mod outfit;
