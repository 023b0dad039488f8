pub mod form_reader;
pub mod status;
