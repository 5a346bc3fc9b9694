/// Patent application service interface
pub mod patent;

pub use patent::PatentService;
