pub mod bills;
pub mod bookings;
pub mod categories;
pub mod foods;
pub mod table_food;
pub mod tables;
pub mod users;
