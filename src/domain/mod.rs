// Domain layer: response models and the tool port. No HTTP or transport code here.

pub mod model;
pub mod ports;
