//! Browser console logging for the storefront.
//!
//! Route and step changes are echoed to the devtools console so the funnel
//! can be followed without a debugger.

use gharfresh_funnel::Effect;
use gharfresh_funnel::catalog::SUPPORT_PHONE;
use wasm_bindgen::JsValue;

const BRAND_STYLE: &str = "color: #067A46; font-weight: bold; font-size: 14px;";
const DIM_STYLE: &str = "color: #5C5C5C;";

/// Greeting printed once when the app mounts.
pub fn print_banner() {
    web_sys::console::log_2(
        &JsValue::from_str("%cGharFresh - India's most loved meal kit"),
        &JsValue::from_str(BRAND_STYLE),
    );
    web_sys::console::log_2(
        &JsValue::from_str(&format!(
            "%cNeed help? Call {SUPPORT_PHONE}. Built with Rust + Leptos."
        )),
        &JsValue::from_str(DIM_STYLE),
    );
}

pub fn log_dispatch(intent: &str, effects: &[Effect]) {
    let message = if effects.is_empty() {
        format!("[gharfresh][dispatch] {intent}")
    } else {
        format!("[gharfresh][dispatch] {intent} -> {effects:?}")
    };
    web_sys::console::debug_1(&JsValue::from_str(&message));
}

pub fn log_completed() {
    web_sys::console::info_1(&JsValue::from_str(
        "[gharfresh][funnel] completed, returning home",
    ));
}
