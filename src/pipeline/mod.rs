pub mod stage1_form;
pub mod stage2_aggregate;
pub mod stage3_classify;
pub mod stage4_report;
