use yew::prelude::*;
use yew_hooks::prelude::*;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{window, Element};

use crate::components::chat_widget::ChatWidget;
use crate::components::counter::StatsSection;
use crate::components::image_modal::{facility, Facility, Gallery, ImageModal};
use crate::components::notification::{Notice, Notification};
use crate::components::school_form::{SchoolForm, CONTACT_FIELDS, LOGIN_FIELDS, PARENT_FIELDS, STUDENT_FIELDS};
use crate::components::tabs::{TabPane, Tabs};
use crate::components::upload::FileUpload;
use crate::config;
use crate::forms::FieldMemory;
use crate::storage::SharedStore;

/// Marks every `.reveal` element whose top edge has come into view.
fn reveal_visible_sections() {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else { return };
    let viewport = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    let Ok(nodes) = document.query_selector_all(".reveal") else { return };
    for node in (0..nodes.length()).filter_map(|i| nodes.get(i)) {
        if let Ok(el) = node.dyn_into::<Element>() {
            if el.get_bounding_client_rect().top() < viewport - config::REVEAL_OFFSET {
                let _ = el.class_list().add_1("active");
            }
        }
    }
}

#[function_component]
pub fn Home() -> Html {
    let store = use_context::<SharedStore>();
    let notice = use_state(|| None::<Notice>);
    let notice_serial = use_state(|| 0u32);
    let open_facility = use_state(|| None::<Facility>);

    // Bring back what the visitor typed last time, then keep saving edits.
    {
        use_effect_with_deps(move |store| {
            let listeners = store.as_ref().and_then(|store| {
                let document = window()?.document()?;
                let memory = FieldMemory::new(store.clone());
                let restored = memory.restore_document(&document);
                info!("Restored {} saved form value(s)", restored);
                Some(memory.attach(&document))
            });
            move || drop(listeners)
        }, store);
    }

    use_effect_with_deps(move |_| {
        reveal_visible_sections();
        || ()
    }, ());
    use_event_with_window("scroll", move |_: Event| reveal_visible_sections());

    let on_notify = {
        let notice = notice.clone();
        let notice_serial = notice_serial.clone();
        Callback::from(move |n: Notice| {
            debug!("Notification: {}", n.text);
            notice.set(Some(n));
            notice_serial.set(*notice_serial + 1);
        })
    };

    let on_open_facility = {
        let open_facility = open_facility.clone();
        Callback::from(move |key: &'static str| open_facility.set(facility(key)))
    };
    let on_close_facility = {
        let open_facility = open_facility.clone();
        Callback::from(move |_: ()| open_facility.set(None))
    };

    let admission_panes = vec![
        TabPane {
            id: "student",
            label: "Student details",
            content: html! {
                <SchoolForm
                    id="studentForm"
                    fields={STUDENT_FIELDS}
                    submit_label="Submit application"
                    success_text="Application received! We will contact you soon."
                >
                    <FileUpload input_id="studentDocs" label="Report cards & certificates (max 5MB each)" on_notify={on_notify.clone()} />
                </SchoolForm>
            },
        },
        TabPane {
            id: "parent",
            label: "Parent details",
            content: html! {
                <SchoolForm
                    id="parentForm"
                    fields={PARENT_FIELDS}
                    submit_label="Save parent details"
                    success_text="Thank you! Parent details saved."
                >
                    <FileUpload input_id="parentDocs" label="ID document (max 5MB)" on_notify={on_notify.clone()} />
                </SchoolForm>
            },
        },
        TabPane {
            id: "portal",
            label: "Parent portal",
            content: html! {
                <SchoolForm
                    id="loginForm"
                    fields={LOGIN_FIELDS}
                    submit_label="Log in"
                    success_text="Welcome back!"
                />
            },
        },
    ];

    html! {
        <div class="school-page">
            <style>
                {r#"
                    .reveal { opacity: 0; transform: translateY(40px); transition: opacity 0.8s ease, transform 0.8s ease; }
                    .reveal.active { opacity: 1; transform: translateY(0); }
                "#}
            </style>
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Bright Future School"}</h1>
                    <p>{"Where curiosity grows into confidence."}</p>
                    <a href="#admissions" class="hero-cta" onclick={Callback::from(|e: MouseEvent| {
                        e.prevent_default();
                        crate::components::nav::scroll_to_anchor("#admissions");
                    })}>
                        {"Apply now"}
                    </a>
                </div>
            </section>

            <section id="about" class="about reveal">
                <h2>{"About Us"}</h2>
                <p>{"A caring community of teachers and families, offering a balanced education from nursery to grade six."}</p>
            </section>

            <StatsSection />

            <section id="admissions" class="admissions reveal">
                <h2>{"Admissions"}</h2>
                <Tabs panes={admission_panes} />
            </section>

            <section id="facilities" class="facilities reveal">
                <h2>{"Our Facilities"}</h2>
                <Gallery on_open={on_open_facility} />
            </section>

            <section id="contact" class="contact reveal">
                <h2>{"Contact Us"}</h2>
                <SchoolForm
                    id="contactForm"
                    fields={CONTACT_FIELDS}
                    submit_label="Send message"
                    success_text="Message sent! We will get back to you shortly."
                />
            </section>

            <footer class="footer">
                <p>{"© Bright Future School"}</p>
            </footer>

            <ImageModal facility={*open_facility} on_close={on_close_facility} />
            <Notification notice={(*notice).clone()} serial={*notice_serial} />
            <ChatWidget />
        </div>
    }
}
