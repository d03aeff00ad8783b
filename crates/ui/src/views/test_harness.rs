use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::PlanStore;
use storage::repository::{EntryRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::{AppHeader, ExecutionView, WorkbookView, use_plan_loader};

#[derive(Clone)]
struct TestApp {
    plan_store: Arc<PlanStore>,
}

impl UiApp for TestApp {
    fn plan_store(&self) -> Arc<PlanStore> {
        Arc::clone(&self.plan_store)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Workbook,
    Execution,
    Header,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let load_error = use_plan_loader();
    rsx! {
        if let Some(err) = load_error() {
            p { class: "load-error", "{err.message()}" }
        }
        {
            match view {
                ViewKind::Workbook => rsx! { WorkbookView {} },
                ViewKind::Execution => rsx! { ExecutionView {} },
                ViewKind::Header => rsx! { AppHeader { execution: false } },
            }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_entries(view, Storage::in_memory().entries)
}

pub fn setup_view_harness_with_entries(
    view: ViewKind,
    entries: Arc<dyn EntryRepository>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        plan_store: Arc::new(PlanStore::new(entries)),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
