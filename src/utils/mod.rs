pub mod date;
pub mod id;
pub mod path;
pub mod table;
