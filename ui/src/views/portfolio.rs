use dioxus::prelude::*;

use crate::content::PortfolioDemo;
use crate::core::platform;
use crate::i18n::use_locale;
use crate::t;
use crate::Hero;

const SLIDES: [&str; 3] = [
    "/images/portfolio/mac.jpg",
    "/images/portfolio/google.jpg",
    "/images/portfolio/usa.jpg",
];

const SLIDE_INTERVAL_MS: u32 = 3_000;

fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[component]
pub fn Portfolio() -> Element {
    let locale = use_locale();
    let demos: Vec<PortfolioDemo> = locale.list("portfolio.demos");
    let mut current = use_signal(|| 0usize);

    // Dropped with the component, which stops the rotation.
    use_future(move || async move {
        loop {
            platform::sleep_ms(SLIDE_INTERVAL_MS).await;
            let next = next_slide(*current.peek(), SLIDES.len());
            current.set(next);
        }
    });

    rsx! {
        main { id: "portfolio", class: "page page-portfolio",
            Hero {
                video: "/videos/portfolio-bg.mp4",
                title: t!("portfolio-title"),
                subtitle: t!("portfolio-subtitle"),
            }

            section { class: "page-portfolio__demos",
                div { class: "card-grid card-grid--three",
                    for demo in demos {
                        div { key: "{demo.title}", class: "demo-card",
                            img { src: "{demo.image}", alt: "{demo.title}", class: "demo-card__image" }
                            div { class: "demo-card__body",
                                h3 { "{demo.title}" }
                                p { "{demo.description}" }
                            }
                        }
                    }
                }
            }

            section { class: "slider",
                for (index, src) in SLIDES.iter().enumerate() {
                    img {
                        key: "{index}",
                        src: *src,
                        alt: slide_alt(index),
                        class: if index == current() { "slider__image slider__image--active" } else { "slider__image" },
                    }
                }
            }
        }
    }
}

/// Alt text for the slide at `index`, counted from one.
fn slide_alt(index: usize) -> String {
    let position: usize = index + 1;
    t!("portfolio-slide-alt", index = position)
}
