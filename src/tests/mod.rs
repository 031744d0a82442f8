pub mod test_linear;
pub mod test_param;
