pub mod keyboard;
pub mod menu;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use menu::wire_context_menu;
pub use pointer::wire_pointer_handlers;
