pub mod bill;
pub mod booking;
pub mod category;
pub mod food;
pub mod status;
pub mod table;
pub mod table_food;
pub mod user;
