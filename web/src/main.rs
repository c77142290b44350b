use dioxus::prelude::*;

use ui::config;
use ui::views::Landing;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
}

fn main() {
    if let Err(err) = dioxus::logger::init(config::log_level()) {
        eprintln!("[logger] init failed ({err}); continuing without logs");
    }

    #[cfg(feature = "web")]
    LaunchBuilder::web()
        .with_cfg(dioxus::web::Config::new().rootname(config::MOUNT_ELEMENT_ID))
        .launch(App);

    #[cfg(not(feature = "web"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Locale is detected once per session; there is no switcher.
    ui::i18n::init();

    rsx! {
        Router::<Route> {}
    }
}
