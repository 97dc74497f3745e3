pub mod entities;
pub mod policies;
pub mod ports;
pub mod printable;
pub mod services;
pub mod tags;
pub mod value_objects;
