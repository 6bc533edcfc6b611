pub mod chart;
pub mod table_txt;
