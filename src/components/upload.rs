use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::info;
use rand::Rng;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::components::notification::Notice;
use crate::config;
use crate::session::{SessionAction, SessionContext};
use crate::upload::{partition_by_size, SelectedFile, UploadProgress};

#[derive(Properties, PartialEq)]
pub struct FileUploadProps {
    pub input_id: AttrValue,
    pub label: AttrValue,
    pub on_notify: Callback<Notice>,
}

fn selected_files(input: &HtmlInputElement) -> Vec<SelectedFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| SelectedFile::new(file.name(), file.size()))
        .collect()
}

#[function_component(FileUpload)]
pub fn file_upload(props: &FileUploadProps) -> Html {
    let session = use_context::<SessionContext>();
    let input_ref = use_node_ref();
    let list_visible = use_state(|| false);
    let progress = use_state(|| None::<UploadProgress>);
    // Bumped for every run so a superseded progress loop stops.
    let generation = use_mut_ref(|| 0u32);

    let on_change = {
        let session = session.clone();
        let list_visible = list_visible.clone();
        let progress = progress.clone();
        let generation = generation.clone();
        let input_id = props.input_id.to_string();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = selected_files(&input);
            if files.is_empty() {
                return;
            }
            list_visible.set(true);

            let (accepted, rejected) = partition_by_size(files);
            for file in &rejected {
                info!("Rejected {} ({}): over the upload limit", file.name, file.size_label());
                on_notify.emit(Notice::error("File size should not exceed 5MB"));
            }
            let has_accepted = !accepted.is_empty();
            if has_accepted && rejected.is_empty() {
                on_notify.emit(Notice::success(format!("{} file(s) attached", accepted.len())));
            }
            if let Some(session) = &session {
                session.dispatch(SessionAction::FilesSelected {
                    input_id: input_id.clone(),
                    files: accepted,
                });
            }
            if has_accepted {
                simulate_progress(progress.clone(), generation.clone());
            }
        })
    };

    let on_remove = {
        let session = session.clone();
        let list_visible = list_visible.clone();
        let input_ref = input_ref.clone();
        let input_id = props.input_id.to_string();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            list_visible.set(false);
            if let Some(session) = &session {
                session.dispatch(SessionAction::FileRemoved { input_id: input_id.clone() });
            }
        })
    };

    let files: Vec<SelectedFile> = session
        .as_ref()
        .map(|s| s.uploads(&props.input_id).to_vec())
        .unwrap_or_default();

    html! {
        <div class="file-upload">
            <style>
                {r#"
                    .upload-progress { height: 8px; margin-top: 0.5rem; background: #eee; border-radius: 4px; overflow: hidden; }
                    .progress-bar { height: 100%; background: #e91e63; transition: width 0.2s linear; }
                    .file-item { display: flex; justify-content: space-between; align-items: center; padding: 0.4rem 0; }
                    .file-remove { cursor: pointer; font-size: 1.2rem; }
                "#}
            </style>
            <label for={props.input_id.clone()}>{props.label.clone()}</label>
            <input type="file" multiple={true} id={props.input_id.clone()} ref={input_ref} onchange={on_change} />
            <div class="file-list" style={if *list_visible { "display: block;" } else { "display: none;" }}>
                { for files.iter().map(|file| html! {
                    <div class="file-item">
                        <div>
                            <strong>{&file.name}</strong>
                            <small>{file.size_label()}</small>
                        </div>
                        <span class="file-remove" onclick={on_remove.clone()}>{"×"}</span>
                    </div>
                }) }
            </div>
            if let Some(bar) = *progress {
                <div class="upload-progress">
                    <div class="progress-bar" style={bar.width_style()}></div>
                </div>
            }
        </div>
    }
}

fn simulate_progress(progress: UseStateHandle<Option<UploadProgress>>, generation: Rc<RefCell<u32>>) {
    let run = generation.borrow().wrapping_add(1);
    *generation.borrow_mut() = run;
    spawn_local(async move {
        let mut bar = UploadProgress::default();
        progress.set(Some(bar));
        loop {
            TimeoutFuture::new(config::UPLOAD_TICK_MS).await;
            if *generation.borrow() != run {
                return;
            }
            let done = bar.tick(rand::thread_rng().gen_range(0.0..config::UPLOAD_MAX_STEP));
            progress.set(Some(bar));
            if done {
                break;
            }
        }
        TimeoutFuture::new(config::UPLOAD_HIDE_DELAY_MS).await;
        if *generation.borrow() == run {
            progress.set(None);
        }
    });
}
