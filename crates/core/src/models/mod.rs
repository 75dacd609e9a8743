pub mod chart;
pub mod interval;
pub mod series;
pub mod table;
