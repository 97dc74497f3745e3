pub mod ports;
pub mod ranking;
pub mod services;
pub mod value_objects;
