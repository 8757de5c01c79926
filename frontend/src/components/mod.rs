pub mod booking_widget;
pub mod calendar;
pub mod contact;
pub mod modal;
pub mod request_form;
