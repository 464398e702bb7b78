pub mod temporal;
pub mod value;
