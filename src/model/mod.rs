pub mod labels;
pub mod palette;
pub mod points;
pub mod rows;
pub mod theme;
