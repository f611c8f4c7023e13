use dioxus::prelude::*;

use crate::t;

/// Full-bleed hero with a looping background video, dark overlay and centered copy.
#[component]
pub fn Hero(
    video: &'static str,
    title: String,
    subtitle: String,
    overlay: Option<String>,
    title_color: Option<&'static str>,
    children: Element,
) -> Element {
    let overlay_style = overlay.map(|bg| format!("background: {bg};")).unwrap_or_default();
    let title_style = title_color
        .map(|c| format!("color: {c};"))
        .unwrap_or_default();

    rsx! {
        section { class: "hero",
            video {
                class: "hero__video",
                autoplay: true,
                r#loop: true,
                muted: true,
                playsinline: true,
                preload: "metadata",
                source { src: video, r#type: "video/mp4" }
                {t!("video-unsupported")}
            }
            div { class: "hero__overlay", style: "{overlay_style}" }
            div { class: "hero__content",
                h1 { class: "hero__title fade-in", style: "{title_style}", "{title}" }
                p { class: "hero__subtitle slide-up", "{subtitle}" }
                {children}
            }
        }
    }
}
