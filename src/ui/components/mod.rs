pub mod chat_area;
pub mod input_bar;
pub mod toolbar;
