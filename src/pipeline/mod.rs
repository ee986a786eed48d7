pub mod page;
pub mod session;
pub mod stage1_chart_points;
pub mod stage2_table_rows;
pub mod stage3_layout;
pub mod stage4_scene;
pub mod stage5_interact;
pub mod stage6_report;
