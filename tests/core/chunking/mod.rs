pub mod test_multibyte;
pub mod test_overlap;
pub mod test_pipeline;
