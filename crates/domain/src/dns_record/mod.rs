pub mod answer;
pub mod record_type;

pub use answer::{first_address, Answer};
pub use record_type::RecordType;
