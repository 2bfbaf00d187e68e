pub mod booking;
pub mod catalog;
pub mod faq;
pub mod report;
pub mod testimonial;
pub mod time_slot;
pub mod user;

pub use booking::{Booking, BookingDraft, BookingStatus, NewBooking, PaymentStatus, UpdateBooking};
pub use catalog::{
    CatalogItem, IndividualTest, NewIndividualTest, NewTestPackage, TestPackage, TestType,
};
pub use faq::{Faq, NewFaq};
pub use report::{NewReport, Report};
pub use testimonial::{NewTestimonial, Testimonial};
pub use time_slot::TimeSlot;
pub use user::{Account, User};
