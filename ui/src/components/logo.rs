use dioxus::prelude::*;

/// The two text segments of the wordmark, in render order.
pub const LOGO_SEGMENTS: [&str; 2] = ["ov-chipkaart", "dashboard"];

/// Outline effect for the highlighted segment.
pub fn suffix_style(color: &str) -> String {
    format!("text-shadow: 3px 0 {color}, -3px 0 {color};")
}

/// Wordmark with `color` applied as an outline to its first segment.
#[component]
pub fn Logo(#[props(into)] color: String) -> Element {
    let [highlighted, plain] = LOGO_SEGMENTS;

    rsx! {
        div { class: "logo",
            span { class: "logo__suffix", style: suffix_style(&color), "{highlighted}" }
            span { class: "logo__name", "{plain}" }
        }
    }
}
