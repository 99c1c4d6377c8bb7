use dioxus::prelude::*;

use crate::components::LandingPage;

#[cfg(debug_assertions)]
fn log_home_render() {
    tracing::debug!("[i18n] Home render");
}

#[component]
pub fn Home() -> Element {
    #[cfg(debug_assertions)]
    {
        log_home_render();
    }

    rsx! {
        LandingPage {}
    }
}
