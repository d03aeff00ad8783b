use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_route};

use crate::views::{AppHeader, ExecutionView, WorkbookView, use_plan_loader};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WorkbookView)] Workbook {},
        #[route("/execution", ExecutionView)] Execution {},
}

#[component]
fn Layout() -> Element {
    let route = use_route::<Route>();
    let load_error = use_plan_loader();
    let execution = matches!(route, Route::Execution {});

    rsx! {
        div { class: "app",
            AppHeader { execution }
            main { class: "content",
                if let Some(err) = load_error() {
                    p { class: "load-error", "{err.message()}" }
                }
                Outlet::<Route> {}
            }
        }
    }
}
