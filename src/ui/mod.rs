pub mod conversation_row;
pub mod identity;
pub mod main_window;
pub mod sidebar;
pub mod style;
