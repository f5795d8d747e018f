pub mod postfilter;
pub mod prefilter;
