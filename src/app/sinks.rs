use leptos::{prelude::*, task::spawn_local};
use leptos_use::{use_clipboard, UseClipboardReturn};

use crate::ui::{CopyFeedback, SinkError, FEEDBACK_RESET};

/// Copies `text` verbatim. The button label reports the outcome; failures never leave the UI.
#[component]
pub fn CopyButton(
    #[prop(into)] text: Signal<String>,
    #[prop(default = "Copy")] idle_label: &'static str,
) -> impl IntoView {
    let UseClipboardReturn { is_supported, .. } = use_clipboard();
    let feedback = RwSignal::new(CopyFeedback::Idle);

    let settle = move |outcome: Result<(), SinkError>| {
        if let Err(e) = &outcome {
            log::warn!("nothing copied: {e}");
        }
        feedback.set(CopyFeedback::after_copy(&outcome));
        set_timeout(move || feedback.set(CopyFeedback::Idle), FEEDBACK_RESET);
    };

    let on_click = move |_| {
        let text = text.get_untracked();
        if is_supported.get_untracked() {
            spawn_local(async move { settle(copy_text(&text).await) });
        } else {
            settle(copy_with_selection(&text));
        }
    };

    view! {
        <button
            type="button"
            class="px-3 py-2 rounded-md border border-muted/30 text-sm hover:bg-white/10 transition-colors"
            on:click=on_click
        >
            {move || feedback.get().label(idle_label)}
        </button>
    }
}

#[component]
pub fn DownloadButton(
    #[prop(into)] text: Signal<String>,
    file_name: &'static str,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    let on_click = move |_| {
        if let Err(e) = download_text(file_name, &text.get_untracked()) {
            log::warn!("could not save {file_name}: {e}");
            set_failed.set(true);
            set_timeout(move || set_failed.set(false), FEEDBACK_RESET);
        }
    };

    view! {
        <button
            type="button"
            class="px-3 py-2 rounded-md border border-muted/30 text-sm hover:bg-white/10 transition-colors"
            on:click=on_click
        >
            {move || if failed.get() { "Not saved" } else { "Download" }}
        </button>
    }
}

/// Writes through the async clipboard API, falling back to a selection copy when it rejects.
pub async fn copy_text(text: &str) -> Result<(), SinkError> {
    #[cfg(feature = "hydrate")]
    {
        match browser::write_clipboard(text).await {
            Ok(()) => Ok(()),
            Err(e) => {
                log::warn!("{e}, trying selection copy");
                browser::copy_with_selection(text)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(SinkError::NoDocument)
    }
}

/// Copies via a temporary off-screen textarea and the `copy` command.
pub fn copy_with_selection(text: &str) -> Result<(), SinkError> {
    #[cfg(feature = "hydrate")]
    {
        browser::copy_with_selection(text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(SinkError::NoDocument)
    }
}

/// Offers `text` as a UTF-8 plain text download named `file_name`.
pub fn download_text(file_name: &str, text: &str) -> Result<(), SinkError> {
    #[cfg(feature = "hydrate")]
    {
        browser::save(file_name, text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, text);
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlDocument, HtmlElement,
        HtmlTextAreaElement, Url,
    };

    use crate::ui::SinkError;

    fn browser_err(e: JsValue) -> SinkError {
        SinkError::Browser(format!("{e:?}"))
    }

    fn document() -> Result<(Document, HtmlElement), SinkError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SinkError::NoDocument)?;
        let body = document.body().ok_or(SinkError::NoDocument)?;
        Ok((document, body))
    }

    pub async fn write_clipboard(text: &str) -> Result<(), SinkError> {
        let window = web_sys::window().ok_or(SinkError::NoDocument)?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| SinkError::ClipboardRejected(format!("{e:?}")))
    }

    pub fn copy_with_selection(text: &str) -> Result<(), SinkError> {
        let (document, body) = document()?;
        let area = document
            .create_element("textarea")
            .map_err(browser_err)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| SinkError::Browser("textarea has an unexpected type".to_string()))?;
        area.set_value(text);
        area.set_attribute("readonly", "").map_err(browser_err)?;
        area.set_attribute("style", "position:fixed;top:0;left:-9999px;opacity:0")
            .map_err(browser_err)?;
        body.append_child(&area).map_err(browser_err)?;
        area.select();

        let copied = document
            .dyn_ref::<HtmlDocument>()
            .ok_or(SinkError::NoDocument)
            .and_then(|d| d.exec_command("copy").map_err(browser_err));
        area.remove();

        if copied? {
            Ok(())
        } else {
            Err(SinkError::CopyCommandRefused)
        }
    }

    pub fn save(file_name: &str, text: &str) -> Result<(), SinkError> {
        let parts = js_sys::Array::of1(&JsValue::from_str(text));
        let opts = BlobPropertyBag::new();
        opts.set_type("text/plain;charset=utf-8");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &opts).map_err(browser_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(browser_err)?;

        let (document, body) = document()?;
        let anchor = document
            .create_element("a")
            .map_err(browser_err)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| SinkError::Browser("anchor has an unexpected type".to_string()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        body.append_child(&anchor).map_err(browser_err)?;
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).map_err(browser_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_download_is_noop_off_browser() {
        assert_eq!(download_text("scope-summary.txt", "hello"), Ok(()));
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_copy_fails_off_browser() {
        let outcome = copy_with_selection("hello");
        assert_eq!(outcome, Err(SinkError::NoDocument));
        assert_eq!(CopyFeedback::after_copy(&outcome), CopyFeedback::Failed);
    }
}
