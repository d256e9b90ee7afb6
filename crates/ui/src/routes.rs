use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::DeckView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DeckView)] Deck {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
