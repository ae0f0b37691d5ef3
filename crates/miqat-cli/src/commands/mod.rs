pub mod convert;
pub mod qibla;
pub mod shared;
pub mod times;
pub mod today;
