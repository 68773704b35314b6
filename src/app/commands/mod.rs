pub mod activate;
pub mod deploy;
