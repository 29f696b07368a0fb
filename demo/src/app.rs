use std::cell::RefCell;
use std::rc::Rc;

use accordion::{Accordion, AccordionOptions, ItemOptions};
use leptos::*;

/// Three-section accordion driven imperatively from a leptos view. The
/// widget is constructed once the node refs are mounted and torn down on
/// cleanup.
#[component]
pub fn App() -> impl IntoView {
    let trigger_one = create_node_ref::<html::Button>();
    let trigger_two = create_node_ref::<html::Button>();
    let trigger_three = create_node_ref::<html::Button>();
    let panel_one = create_node_ref::<html::Div>();
    let panel_two = create_node_ref::<html::Div>();
    let panel_three = create_node_ref::<html::Div>();

    let widget: Rc<RefCell<Option<Accordion>>> = Rc::new(RefCell::new(None));
    let status = create_rw_signal(String::from("waiting for mount"));

    let widget_mount = widget.clone();
    create_effect(move |_| {
        if widget_mount.borrow().is_some() {
            return;
        }
        let pairs = [
            (trigger_one, panel_one),
            (trigger_two, panel_two),
            (trigger_three, panel_three),
        ];
        let mut items = Vec::new();
        for (index, (trigger, panel)) in pairs.into_iter().enumerate() {
            let (Some(trigger), Some(panel)) = (trigger.get(), panel.get()) else {
                return;
            };
            items.push(
                ItemOptions::new((*trigger).clone().into(), (*panel).clone().into())
                    .with_open_callback(Rc::new(move |_| {
                        status.set(format!("opened section {}", index + 1));
                    }))
                    .with_close_callback(Rc::new(move |_| {
                        status.set(format!("closed section {}", index + 1));
                    })),
            );
        }
        let mut options = AccordionOptions::new(items);
        options.initial_index = Some(0);
        options.init_callback = Some(Rc::new(move || status.set("initialized".to_string())));
        options.destroy_callback = Some(Rc::new(move || status.set("destroyed".to_string())));
        match Accordion::new(options) {
            Ok(accordion) => {
                accordion.init();
                *widget_mount.borrow_mut() = Some(accordion);
            }
            Err(err) => status.set(err.to_string()),
        }
    });

    let widget_cleanup = widget.clone();
    on_cleanup(move || {
        if let Some(accordion) = widget_cleanup.borrow().as_ref() {
            accordion.destroy();
        }
    });

    let widget_recalc = widget.clone();
    let recalc = move |_| {
        if let Some(accordion) = widget_recalc.borrow().as_ref() {
            accordion.recalc_height();
        }
    };
    let widget_restart = widget.clone();
    let restart = move |_| {
        if let Some(accordion) = widget_restart.borrow().as_ref() {
            accordion.destroy();
            accordion.init();
        }
    };

    view! {
        <main class="accordion-demo">
            <h1>"Accordion"</h1>
            <p class="accordion-status">{move || status.get()}</p>
            <section class="accordion">
                <button class="accordion-trigger" node_ref=trigger_one>
                    "Section one"
                </button>
                <div class="accordion-panel" node_ref=panel_one>
                    <p>"First panel content."</p>
                </div>
                <button class="accordion-trigger" node_ref=trigger_two>
                    "Section two"
                </button>
                <div class="accordion-panel" node_ref=panel_two>
                    <p>"Second panel content, a little longer than the first."</p>
                </div>
                <button class="accordion-trigger" node_ref=trigger_three>
                    "Section three"
                </button>
                <div class="accordion-panel" node_ref=panel_three>
                    <p>"Third panel content."</p>
                </div>
            </section>
            <div class="accordion-controls">
                <button on:click=recalc>"Recalculate heights"</button>
                <button on:click=restart>"Restart widget"</button>
            </div>
        </main>
    }
}
