use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::config::{CaptchaConfig, CAPTCHA};
use crate::t;

static NEXT_WIDGET: AtomicUsize = AtomicUsize::new(0);

/// Fresh DOM id for one widget container.
fn next_widget_id() -> String {
    format!("g-recaptcha-{}", NEXT_WIDGET.fetch_add(1, Ordering::Relaxed))
}

/// Script that renders the invisible widget into `element_id`.
///
/// `api.js` is loaded with `render=explicit`, so nothing is rendered until
/// this runs. It polls until `grecaptcha` is available, gives up if the
/// container is gone, and renders at most once per container.
pub fn render_widget_js(element_id: &str, config: &CaptchaConfig) -> String {
    format!(
        r#"(function mount() {{
    var el = document.getElementById("{element_id}");
    if (!el || el.dataset.widgetId) return;
    if (!window.grecaptcha || !window.grecaptcha.render) {{
        setTimeout(mount, 100);
        return;
    }}
    grecaptcha.ready(function () {{
        if (el.dataset.widgetId) return;
        el.dataset.widgetId = grecaptcha.render(el, {{ sitekey: "{site_key}", size: "{size}" }});
    }});
}})();"#,
        site_key = config.site_key,
        size = config.size,
    )
}

/// Privacy notice plus the invisible reCAPTCHA widget.
///
/// Every mount renders its own widget, so the form shown after a toggle
/// gets one too. The challenge token is never read.
#[component]
pub fn InvisibleCaptcha() -> Element {
    let widget_id = use_hook(next_widget_id);

    let mount_widget = {
        let widget_id = widget_id.clone();
        move |_: MountedEvent| {
            let js = render_widget_js(&widget_id, &CAPTCHA);
            spawn(async move {
                if let Err(err) = document::eval(&js).await {
                    warn!(?err, "captcha widget render failed");
                }
            });
        }
    };

    rsx! {
        div { class: "captcha",
            p { class: "captcha__notice",
                {t!("captcha.notice")}
                " "
                a { href: CAPTCHA.privacy_url, target: "_blank", {t!("captcha.privacy-policy")} }
                " "
                {t!("captcha.and")}
                " "
                a { href: CAPTCHA.terms_url, target: "_blank", {t!("captcha.terms-of-service")} }
                "."
            }
            div {
                id: "{widget_id}",
                class: "g-recaptcha",
                "data-sitekey": CAPTCHA.site_key,
                "data-size": CAPTCHA.size,
                onmounted: mount_widget,
            }
            document::Script { src: CAPTCHA.script_src, defer: true }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        let mut dom = VirtualDom::new(InvisibleCaptcha);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn widget_ids(html: &str) -> Vec<String> {
        html.match_indices(r#"id="g-recaptcha-"#)
            .map(|(start, _)| {
                let rest = &html[start + 4..];
                rest[..rest.find('"').unwrap_or(rest.len())].to_string()
            })
            .collect()
    }

    #[test]
    fn notice_links_open_in_new_tab() {
        let html = render();
        assert!(html.contains("This page is protected by reCAPTCHA"));
        assert!(html.contains(r#"href="https://policies.google.com/privacy""#));
        assert!(html.contains(r#"href="https://policies.google.com/terms""#));
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
    }

    #[test]
    fn widget_is_invisible_and_keyed() {
        let html = render();
        assert!(html.contains(r#"data-sitekey="6LdGNPsUAAAAAH-De07bVDCXyqX70pPMOyEE7rND""#));
        assert!(html.contains(r#"data-size="invisible""#));
    }

    #[test]
    fn script_defers_rendering_to_each_mount() {
        assert!(CAPTCHA.script_src.ends_with("?render=explicit"));

        let js = render_widget_js("g-recaptcha-7", &CAPTCHA);
        assert!(js.contains(r#"getElementById("g-recaptcha-7")"#));
        assert!(js.contains("grecaptcha.render(el"));
        assert!(js.contains(r#"sitekey: "6LdGNPsUAAAAAH-De07bVDCXyqX70pPMOyEE7rND""#));
        assert!(js.contains(r#"size: "invisible""#));
    }

    #[component]
    fn Pair() -> Element {
        rsx! {
            InvisibleCaptcha {}
            InvisibleCaptcha {}
        }
    }

    #[test]
    fn every_mount_gets_its_own_container() {
        let mut dom = VirtualDom::new(Pair);
        dom.rebuild_in_place();
        let ids = widget_ids(&dioxus_ssr::render(&dom));
        assert_eq!(ids.len(), 2, "{ids:?}");
        assert_ne!(ids[0], ids[1]);
    }
}
