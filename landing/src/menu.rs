//! The shipped navigation definition, resolved once at startup.

use menutree::Menu;
use once_cell::sync::Lazy;
use wasm_bindgen::JsValue;

/// Raw menu definition bundled into the binary.
const MENU_JSON: &str = include_str!("../menu.json");

/// The resolved navigation tree. A rejected definition leaves the header
/// without dropdowns instead of taking the page down.
pub static MENU: Lazy<Menu> = Lazy::new(|| match Menu::from_json(MENU_JSON) {
    Ok(menu) => menu,
    Err(err) => {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "[ajil][warn] menu definition rejected: {err}"
        )));
        Menu::empty()
    }
});
