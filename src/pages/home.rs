use dioxus::prelude::*;

use crate::components::{
    About, Backdrop, Contact, Footer, Hero, Knowledge, LoadingScreen, Navbar, NoticeStack,
    Projects, ReloadPrompt,
};

/// The single page of the site.
#[component]
pub fn Home() -> Element {
    rsx! {
        LoadingScreen {}
        Backdrop {}
        Navbar {}
        main { class: "page",
            Hero {}
            About {}
            Knowledge {}
            Projects {}
            Contact {}
        }
        Footer {}
        NoticeStack {}
        ReloadPrompt {}
    }
}
