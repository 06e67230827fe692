pub mod batch;
pub mod inspect;
