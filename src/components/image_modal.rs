#[cfg(test)]
#[path = "image_modal_test.rs"]
mod image_modal_test;

use yew::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Facility {
    pub key: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FACILITIES: [Facility; 6] = [
    Facility { key: "classroom", icon: "📚", title: "Modern Classrooms", description: "Equipped for learning." },
    Facility { key: "playground", icon: "⚽", title: "Playground", description: "Fun space." },
    Facility { key: "library", icon: "📖", title: "Library", description: "Reading zone." },
    Facility { key: "lab", icon: "🔬", title: "Science Lab", description: "Hands-on discovery." },
    Facility { key: "uniform", icon: "👔", title: "Uniforms", description: "Black & Pink." },
    Facility { key: "activities", icon: "🎨", title: "Activities", description: "Art, music, fun." },
];

pub fn facility(key: &str) -> Option<Facility> {
    FACILITIES.iter().copied().find(|f| f.key == key)
}

fn lock_page_scroll(locked: bool) {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageModalProps {
    pub facility: Option<Facility>,
    pub on_close: Callback<()>,
}

#[function_component(ImageModal)]
pub fn image_modal(props: &ImageModalProps) -> Html {
    use_effect_with_deps(move |open| {
        if *open {
            lock_page_scroll(true);
        }
        let open = *open;
        move || {
            if open {
                lock_page_scroll(false);
            }
        }
    }, props.facility.is_some());

    let Some(facility) = props.facility else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Only clicks on the backdrop itself close the modal.
    let backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };

    html! {
        <div id="imageModal" class="modal" style="display: block;" onclick={backdrop_click}>
            <style>
                {r#"
                    .modal { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.7); z-index: 1000; }
                    .modal-content { position: relative; max-width: 480px; margin: 15vh auto; padding: 2rem; background: #fff; border-radius: 12px; }
                    .modal .close { position: absolute; top: 0.5rem; right: 1rem; font-size: 1.5rem; cursor: pointer; }
                "#}
            </style>
            <div class="modal-content">
                <span class="close" onclick={close}>{"×"}</span>
                <div id="imageModalContent">
                    <h2>{format!("{} {}", facility.icon, facility.title)}</h2>
                    <p>{facility.description}</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub on_open: Callback<&'static str>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    html! {
        <div class="gallery-grid">
            { for FACILITIES.iter().map(|f| {
                let facility = *f;
                let on_open = props.on_open.clone();
                html! {
                    <div class="gallery-item reveal" onclick={Callback::from(move |_: MouseEvent| on_open.emit(facility.key))}>
                        <span class="gallery-icon">{facility.icon}</span>
                        <h3>{facility.title}</h3>
                    </div>
                }
            }) }
        </div>
    }
}
