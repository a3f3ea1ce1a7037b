pub mod checkout_tray;
pub mod get_menu;
