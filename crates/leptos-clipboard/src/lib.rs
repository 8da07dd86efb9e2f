//! Leptos Clipboard Utilities
//!
//! Copy text to the system clipboard from a Leptos component.
//! Uses the async Clipboard API when the page may, and falls back to a hidden
//! textarea plus `execCommand("copy")` otherwise. A `CopiedFlag` drives the
//! transient "Copied!" indicator.

use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no window or document available")]
    NoWindow,
    #[error("copy rejected: {0}")]
    Rejected(String),
    #[error("clipboard not supported in this context")]
    Unsupported,
}

/// Which mechanism ended up writing the clipboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyMethod {
    /// `navigator.clipboard.writeText`
    ClipboardApi,
    /// Hidden textarea + `document.execCommand("copy")`
    ExecCommand,
}

/// "Copied" indicator signals
#[derive(Clone, Copy)]
pub struct CopiedFlag {
    pub copied_read: ReadSignal<bool>,
    pub copied_write: WriteSignal<bool>,
    /// Bumped on every flash so an older timeout can't clear a newer flash
    generation_read: ReadSignal<u32>,
    generation_write: WriteSignal<u32>,
}

impl CopiedFlag {
    pub fn get(&self) -> bool {
        self.copied_read.get()
    }
}

pub fn create_copied_flag() -> CopiedFlag {
    let (copied_read, copied_write) = signal(false);
    let (generation_read, generation_write) = signal(0u32);
    CopiedFlag {
        copied_read,
        copied_write,
        generation_read,
        generation_write,
    }
}

/// Raise the flag and drop it again after `duration_ms`
pub fn flash(flag: &CopiedFlag, duration_ms: i32) {
    flag.generation_write.update(|g| *g = g.wrapping_add(1));
    flag.copied_write.set(true);

    let generation = flag.generation_read.get_untracked();
    let flag = *flag;
    if let Some(win) = web_sys::window() {
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            if flag.generation_read.get_untracked() == generation {
                flag.copied_write.set(false);
            }
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            duration_ms,
        );
        cb.forget();
    }
}

/// Write `text` to the clipboard, trying the async API first.
///
/// Empty text is not copied and reports `Unsupported`.
pub async fn copy_text(text: &str) -> Result<CopyMethod, ClipboardError> {
    if text.is_empty() {
        return Err(ClipboardError::Unsupported);
    }

    match copy_with_clipboard_api(text).await {
        Ok(()) => Ok(CopyMethod::ClipboardApi),
        Err(e) => {
            log::warn!("clipboard API unavailable ({}), falling back to execCommand", e);
            copy_with_exec_command(text).map(|_| CopyMethod::ExecCommand)
        }
    }
}

/// Copy `text` and flash `flag` for `duration_ms`.
///
/// The flag goes up even when both mechanisms fail; the error is still
/// returned so the caller can log it.
pub async fn copy_and_flash(text: &str, flag: CopiedFlag, duration_ms: i32) -> Result<CopyMethod, ClipboardError> {
    let result = copy_text(text).await;
    flash(&flag, duration_ms);
    result
}

async fn copy_with_clipboard_api(text: &str) -> Result<(), ClipboardError> {
    let win = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let navigator = win.navigator();

    // `navigator.clipboard` is undefined outside secure contexts
    let raw = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))?;
    if raw.is_undefined() || raw.is_null() {
        return Err(ClipboardError::Unsupported);
    }
    let clipboard: web_sys::Clipboard = raw.unchecked_into();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))
}

fn copy_with_exec_command(text: &str) -> Result<(), ClipboardError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ClipboardError::NoWindow)?;
    let body = document.body().ok_or(ClipboardError::NoWindow)?;
    let rejected = |e: JsValue| ClipboardError::Rejected(format!("{:?}", e));

    let textarea = document
        .create_element("textarea")
        .map_err(rejected)?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .map_err(|_| ClipboardError::Unsupported)?;
    textarea.set_value(text);
    let _ = textarea.set_attribute("readonly", "");
    let _ = textarea.set_attribute("style", "position: fixed; top: -1000px; opacity: 0;");

    body.append_child(&textarea).map_err(rejected)?;
    textarea.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .ok_or(ClipboardError::Unsupported)
        .and_then(|doc| doc.exec_command("copy").map_err(rejected));
    let _ = body.remove_child(&textarea);

    match copied? {
        true => Ok(()),
        false => Err(ClipboardError::Rejected("execCommand returned false".to_string())),
    }
}
