pub mod categories;
pub mod expenses;
