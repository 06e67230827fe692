pub mod cli;
pub mod predict;
pub mod serve;
