pub mod prom;
pub mod report;
