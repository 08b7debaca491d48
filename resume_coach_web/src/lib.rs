//! Browser UI for Resume Coach: pick a resume, POST it to the analysis
//! endpoint, render the returned report.

use leptos::*;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_COMMIT: &str = env!("GIT_COMMIT_HASH");

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, HtmlInputElement, Request, RequestInit, Response};

use resume_coach::{
    file_label_text, AnalysisReport, CoachError, ReportView, ALERT_DISMISS, ANALYZE_ENDPOINT,
    RESUME_FIELD, SUCCESS_MESSAGE,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert-error",
            AlertKind::Success => "alert alert-success",
        }
    }
}

#[derive(Clone)]
struct Alert {
    seq: u64,
    kind: AlertKind,
    message: String,
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else {
        err.as_string()
            .unwrap_or_else(|| "request failed".to_string())
    }
}

fn transport(err: JsValue) -> CoachError {
    CoachError::Transport(js_error_message(&err))
}

/// Upload the file under the fixed multipart field name and shape the JSON
/// response into a display-ready view. A non-2xx status collapses into the
/// generic failure without reading the body.
async fn analyze_resume(file: &File) -> Result<ReportView, CoachError> {
    let form = FormData::new().map_err(transport)?;
    form.append_with_blob_and_filename(RESUME_FIELD, file, &file.name())
        .map_err(transport)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(ANALYZE_ENDPOINT, &opts).map_err(transport)?;
    let window =
        web_sys::window().ok_or_else(|| CoachError::Transport("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;

    if !response.ok() {
        return Err(CoachError::AnalysisFailed);
    }

    let body = JsFuture::from(response.json().map_err(transport)?)
        .await
        .map_err(|err| CoachError::InvalidResponse(js_error_message(&err)))?;
    let report: AnalysisReport = serde_wasm_bindgen::from_value(body)
        .map_err(|err| CoachError::InvalidResponse(err.to_string()))?;
    Ok(ReportView::from_report(&report))
}

fn report_section(view: ReportView) -> impl IntoView {
    view! {
        <div class="metrics">
            {view
                .metrics
                .into_iter()
                .map(|card| {
                    view! {
                        <div class="metric-card">
                            <div class="metric-value">{card.value}</div>
                            <div class="metric-label">{card.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="suggestions">
            <h3>"Improvement Suggestions"</h3>
            <ul>
                {view
                    .suggestions
                    .into_iter()
                    .map(|suggestion| view! { <li>{suggestion}</li> })
                    .collect_view()}
            </ul>
        </div>
        <div class="visualization">
            <h3>"Skills Analysis"</h3>
            // Reserved for chart rendering.
            <div class="chart-container"></div>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (selected, set_selected) = create_signal(Option::<File>::None);
    let (busy, set_busy) = create_signal(false);
    let (alert, set_alert) = create_signal(Option::<Alert>::None);
    let (report, set_report) = create_signal(Option::<ReportView>::None);
    let (alert_seq, set_alert_seq) = create_signal(0u64);

    // One alert at a time. A fresh alert replaces the current one; the
    // older scheduled dismissal no-ops because its seq no longer matches.
    let show_alert = move |kind: AlertKind, message: String| {
        let seq = alert_seq.get_untracked() + 1;
        set_alert_seq.set(seq);
        set_alert.set(Some(Alert { seq, kind, message }));
        set_timeout(
            move || {
                set_alert.update(|slot| {
                    if slot.as_ref().is_some_and(|a| a.seq == seq) {
                        *slot = None;
                    }
                });
            },
            ALERT_DISMISS,
        );
    };

    let on_file_change = move |ev: ev::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.item(0));
        set_selected.set(file);
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(file) = selected.get_untracked() else {
            show_alert(AlertKind::Error, CoachError::NoFileSelected.to_string());
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            match analyze_resume(&file).await {
                Ok(view) => {
                    set_busy.set(false);
                    set_report.set(Some(view));
                    show_alert(AlertKind::Success, SUCCESS_MESSAGE.to_string());
                }
                Err(err) => {
                    set_busy.set(false);
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "analysis request failed: {err}"
                    )));
                    show_alert(AlertKind::Error, err.to_string());
                }
            }
        });
    };

    let label_text = move || file_label_text(selected.get().map(|f| f.name()).as_deref());

    view! {
        <main class="analyzer">
            <header>
                <h1>"Resume Coach"</h1>
                <p class="subtitle">"Upload your resume for scoring and improvement suggestions."</p>
            </header>
            <form
                class="upload-form"
                on:submit=on_submit
                on:dragover=move |ev: ev::DragEvent| ev.prevent_default()
                on:drop=move |ev: ev::DragEvent| {
                    ev.prevent_default();
                    if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.item(0)) {
                        set_selected.set(Some(file));
                    }
                }
            >
                {move || {
                    alert.get().map(|a| view! { <div class=a.kind.class()>{a.message}</div> })
                }}
                <label class="file-label" for="resume-file">
                    {label_text}
                </label>
                <input id="resume-file" type="file" on:change=on_file_change/>
                <button type="submit" class="btn" disabled=move || busy.get()>
                    "Analyze Resume"
                </button>
            </form>
            <div class="loading" class:active=move || busy.get()>
                <span class="spinner"></span>
                <p>"Analyzing your resume…"</p>
            </div>
            <section
                class="results"
                style=move || if report.get().is_some() { "display:block;" } else { "display:none;" }
            >
                {move || report.get().map(report_section)}
            </section>
            <footer>
                <p class="note">{"Resume Coach web "}{APP_VERSION}{" ("}{APP_COMMIT}{")"}</p>
            </footer>
        </main>
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <App/> });
}
