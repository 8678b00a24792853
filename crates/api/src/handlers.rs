pub mod calendar;
pub mod shift;
pub mod shift_template;
pub mod user;
