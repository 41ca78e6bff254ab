#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct TabPane {
    pub id: &'static str,
    pub label: &'static str,
    pub content: Html,
}

const TAB_STYLES: &str = r#"
.tab-buttons { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
.tab-btn { padding: 0.6rem 1.2rem; border: 1px solid #e91e63; background: transparent; cursor: pointer; }
.tab-btn.active { background: #e91e63; color: #fff; }
.tab-content { display: none; }
.tab-content.active { display: block; }
"#;

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub panes: Vec<TabPane>,
}

/// Exactly one pane and its button carry `active` at a time.
#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let first = props.panes.first().map(|p| p.id).unwrap_or_default();
    let active = use_state(|| first);

    html! {
        <div class="tabs">
            <style>{TAB_STYLES}</style>
            <div class="tab-buttons">
                { for props.panes.iter().map(|pane| {
                    let onclick = {
                        let active = active.clone();
                        let id = pane.id;
                        Callback::from(move |_: MouseEvent| active.set(id))
                    };
                    html! {
                        <button class={classes!("tab-btn", (*active == pane.id).then(|| "active"))} onclick={onclick}>
                            {pane.label}
                        </button>
                    }
                }) }
            </div>
            { for props.panes.iter().map(|pane| html! {
                <div id={pane.id} class={classes!("tab-content", (*active == pane.id).then(|| "active"))}>
                    {pane.content.clone()}
                </div>
            }) }
        </div>
    }
}
