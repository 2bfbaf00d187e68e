pub mod bookings;
pub mod faqs;
pub mod health;
pub mod individual_tests;
pub mod reports;
pub mod test_packages;
pub mod testimonials;
