use yew::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;

use crate::config;

#[derive(Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Password,
    Select(&'static [&'static str]),
    TextArea,
}

/// One labelled control. `name` doubles as its storage key.
#[derive(Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: true }
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn view(&self, form_id: &str) -> Html {
        let id = format!("{}-{}", form_id, self.name);
        let control = match self.kind {
            FieldKind::Select(options) => html! {
                <select id={id.clone()} name={self.name} required={self.required}>
                    <option value="">{"Select..."}</option>
                    { for options.iter().map(|o| html! { <option value={*o}>{*o}</option> }) }
                </select>
            },
            FieldKind::TextArea => html! {
                <textarea id={id.clone()} name={self.name} rows="4" required={self.required}></textarea>
            },
            kind => {
                let input_type = match kind {
                    FieldKind::Email => "email",
                    FieldKind::Tel => "tel",
                    FieldKind::Date => "date",
                    FieldKind::Password => "password",
                    _ => "text",
                };
                html! { <input id={id.clone()} type={input_type} name={self.name} required={self.required} /> }
            }
        };
        html! {
            <div class="form-group">
                <label for={id}>{self.label}</label>
                {control}
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SchoolFormProps {
    pub id: &'static str,
    pub fields: &'static [FieldSpec],
    pub submit_label: &'static str,
    pub success_text: &'static str,
    #[prop_or_default]
    pub children: Children,
}

/// Form with a pretend submission: a short loading state, a success banner,
/// then a reset. Nothing is sent anywhere.
#[function_component(SchoolForm)]
pub fn school_form(props: &SchoolFormProps) -> Html {
    let form_ref = use_node_ref();
    let loading = use_state(|| false);
    let success = use_state(|| false);

    let on_submit = {
        let form_ref = form_ref.clone();
        let loading = loading.clone();
        let success = success.clone();
        let form_id = props.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Submitting {}", form_id);
            loading.set(true);
            let form_ref = form_ref.clone();
            let loading = loading.clone();
            let success = success.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::FORM_SUBMIT_DELAY_MS).await;
                loading.set(false);
                success.set(true);
                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }
                TimeoutFuture::new(config::FORM_SUCCESS_MS).await;
                success.set(false);
            });
        })
    };

    html! {
        <form id={props.id} class="school-form" ref={form_ref} onsubmit={on_submit}>
            { for props.fields.iter().map(|f| f.view(props.id)) }
            { for props.children.iter() }
            <button type="submit" class="submit-btn" disabled={*loading}>{props.submit_label}</button>
            <div class="loading" style={if *loading { "display: block;" } else { "display: none;" }}>
                {"Sending..."}
            </div>
            <div class="success-message" style={if *success { "display: block;" } else { "display: none;" }}>
                {props.success_text}
            </div>
        </form>
    }
}

const GRADES: &[&str] = &["Nursery", "Kindergarten", "Grade 1", "Grade 2", "Grade 3", "Grade 4", "Grade 5", "Grade 6"];
const RELATIONSHIPS: &[&str] = &["Mother", "Father", "Guardian"];

pub const STUDENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("studentName", "Student's full name", FieldKind::Text),
    FieldSpec::new("dateOfBirth", "Date of birth", FieldKind::Date),
    FieldSpec::new("grade", "Grade applying for", FieldKind::Select(GRADES)),
    FieldSpec::new("previousSchool", "Previous school", FieldKind::Text).optional(),
];

pub const PARENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("parentName", "Parent / guardian name", FieldKind::Text),
    FieldSpec::new("relationship", "Relationship", FieldKind::Select(RELATIONSHIPS)),
    FieldSpec::new("parentEmail", "Email", FieldKind::Email),
    FieldSpec::new("parentPhone", "Phone", FieldKind::Tel),
    FieldSpec::new("address", "Home address", FieldKind::TextArea).optional(),
];

pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Your name", FieldKind::Text),
    FieldSpec::new("email", "Email", FieldKind::Email),
    FieldSpec::new("subject", "Subject", FieldKind::Text).optional(),
    FieldSpec::new("message", "Message", FieldKind::TextArea),
];

pub const LOGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("username", "Student ID or email", FieldKind::Text),
    FieldSpec::new("password", "Password", FieldKind::Password),
];
