pub mod catalog;
pub mod fallback;
pub mod funnel;
pub mod local_store;
pub mod notify;
pub mod payment;
pub mod persister;
pub mod repository;
pub mod session;
pub mod wizard;
