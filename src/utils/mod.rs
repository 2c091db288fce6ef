pub mod colors;
pub mod date;
pub mod name;
pub mod path;
pub mod table;
