pub mod scan;
pub mod topology;
