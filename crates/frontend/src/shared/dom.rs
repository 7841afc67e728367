//! Small browser helpers shared by the pages.

/// Native confirmation dialog. Destructive actions (delete, database
/// maintenance) are gated behind this.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// First file selected in a file `<input>` change event, if any.
pub fn file_from_event(ev: &web_sys::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input: web_sys::HtmlInputElement = ev.target()?.dyn_into().ok()?;
    input.files()?.get(0)
}
