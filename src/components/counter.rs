//! Animated "by the numbers" stats. Counters start the first time the
//! section scrolls into view and count up in equal steps.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use yew::prelude::*;
use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::config;

/// Counts from zero to `target` over a fixed number of ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    current: f64,
    target: f64,
    increment: f64,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        let target = f64::from(target);
        Self {
            current: 0.0,
            target,
            increment: target / f64::from(config::COUNTER_STEPS),
        }
    }

    /// Advances one step; the last step lands exactly on the target.
    pub fn tick(&mut self) -> bool {
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            return true;
        }
        false
    }

    pub fn display(&self) -> u32 {
        self.current.floor() as u32
    }
}

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    target: u32,
    label: AttrValue,
    started: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_state(|| 0u32);
    let finished = use_state(|| false);

    {
        let value = value.clone();
        let finished_setter = finished.clone();
        let target = props.target;
        use_effect_with_deps(move |(started, done)| {
            let interval = (*started && !*done).then(|| {
                let mut animation = CounterAnimation::new(target);
                Interval::new(config::COUNTER_TICK_MS, move || {
                    let complete = animation.tick();
                    value.set(animation.display());
                    if complete {
                        finished_setter.set(true);
                    }
                })
            });
            move || drop(interval)
        }, (props.started, *finished));
    }

    html! {
        <div class="stat">
            <span class="stat-number">{*value}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

const STATS: [(u32, &str); 4] = [
    (1200, "Students"),
    (85, "Teachers"),
    (25, "Years of Excellence"),
    (98, "% Pass Rate"),
];

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let section_ref = use_node_ref();
    let started = use_state(|| false);

    {
        let started = started.clone();
        use_effect_with_deps(move |section_ref| {
            let observer = section_ref.cast::<Element>().and_then(|section| {
                let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                    let visible = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                        .any(|entry| entry.is_intersecting());
                    if visible {
                        started.set(true);
                        observer.disconnect();
                    }
                }) as Box<dyn FnMut(Array, IntersectionObserver)>);
                let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
                observer.observe(&section);
                Some((observer, callback))
            });

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        }, section_ref.clone());
    }

    html! {
        <section id="stats" class="stats" ref={section_ref}>
            <h2>{"Our School in Numbers"}</h2>
            <div class="stats-grid">
                { for STATS.iter().map(|(target, label)| html! {
                    <StatCounter target={*target} label={*label} started={*started} />
                }) }
            </div>
        </section>
    }
}
