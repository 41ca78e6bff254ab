use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use web_sys::PageTransitionEvent;

mod config;
mod storage;
mod forms;
mod chat;
mod session;
mod upload;
mod components {
    pub mod chat_widget;
    pub mod counter;
    pub mod image_modal;
    pub mod nav;
    pub mod notification;
    pub mod school_form;
    pub mod tabs;
    pub mod upload;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
use pages::home::Home;
use session::{SessionAction, SiteSession};
use storage::SharedStore;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, sending visitor home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let store = use_state(storage::open_default);
    let session = use_reducer(SiteSession::new);

    // Leaving the page ends the visit; pending timers die with it.
    {
        let session = session.clone();
        use_event_with_window("pagehide", move |_: Event| {
            session.dispatch(SessionAction::End);
        });
    }
    // Coming back through the back/forward cache reuses this App.
    {
        let session = session.clone();
        use_event_with_window("pageshow", move |e: PageTransitionEvent| {
            if e.persisted() {
                session.dispatch(SessionAction::Start);
            }
        });
    }

    html! {
        <ContextProvider<SharedStore> context={(*store).clone()}>
            <ContextProvider<UseReducerHandle<SiteSession>> context={session}>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<UseReducerHandle<SiteSession>>>
        </ContextProvider<SharedStore>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting school site");
    yew::Renderer::<App>::new().render();
}
