pub mod banner;
pub mod header;
pub mod input_panel;
pub mod result_pane;
