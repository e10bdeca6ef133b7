pub mod calendar;
pub mod messages;
pub mod shift_view;
