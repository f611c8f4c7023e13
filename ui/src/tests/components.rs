//! Component behaviour rendered through a headless `VirtualDom`.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::PrivacyBanner;
use crate::core::consent::ConsentContext;
use crate::core::platform;
use crate::core::storage::{
    MemoryStore, PreferenceStore, Preferences, CONSENT_KEY, DARK_MODE_KEY, LANGUAGE_KEY,
};
use crate::core::theme::ThemeContext;
use crate::i18n::{self, Language, LocaleContext};

/// Root props: the store behind every context plus slots for the contexts
/// created in the root scope, so tests can drive them between renders.
#[derive(Clone)]
struct Shell {
    store: MemoryStore,
    theme: Rc<RefCell<Option<ThemeContext>>>,
    consent: Rc<RefCell<Option<ConsentContext>>>,
}

impl Shell {
    fn new(store: MemoryStore) -> Self {
        Self {
            store: store.with_entry(LANGUAGE_KEY, "en"),
            theme: Rc::default(),
            consent: Rc::default(),
        }
    }

    fn theme(&self) -> ThemeContext {
        self.theme.borrow().clone().expect("theme provided")
    }

    fn consent(&self) -> ConsentContext {
        self.consent.borrow().clone().expect("consent provided")
    }
}

/// Provides the contexts the web shell provides, then renders the banner.
fn shell(props: Shell) -> Element {
    let prefs = use_context_provider(|| Preferences::new(props.store.clone()));
    let theme = {
        let prefs = prefs.clone();
        use_context_provider(move || ThemeContext::new(prefs, true))
    };
    let consent = {
        let prefs = prefs.clone();
        use_context_provider(move || ConsentContext::new(prefs))
    };
    use_context_provider(move || LocaleContext::new(prefs, Language::En));

    use_hook(|| {
        *props.theme.borrow_mut() = Some(theme);
        *props.consent.borrow_mut() = Some(consent);
    });

    rsx! { PrivacyBanner {} }
}

fn mount(store: MemoryStore) -> (VirtualDom, Shell, String) {
    i18n::init();
    let props = Shell::new(store);
    let mut dom = VirtualDom::new_with_props(shell, props.clone());
    let first = format!("{:?}", dom.rebuild_to_vec());
    (dom, props, first)
}

#[test]
fn theme_toggle_persists_and_marks_document() {
    let (dom, shell, _) = mount(MemoryStore::new());
    assert_eq!(platform::document_dark_class(), Some(true));

    let mut theme = shell.theme();
    let dark = dom.in_runtime(|| {
        theme.toggle();
        theme.is_dark()
    });

    assert!(!dark);
    assert_eq!(shell.store.read(DARK_MODE_KEY).as_deref(), Some("false"));
    assert_eq!(platform::document_dark_class(), Some(false));
}

#[test]
fn privacy_banner_hides_after_accept() {
    let accept = i18n::text("cookie-accept");
    let (mut dom, shell, first) = mount(MemoryStore::new());
    assert!(first.contains(&accept), "banner missing on first visit: {first}");

    let mut consent = shell.consent();
    dom.in_runtime(|| consent.accept());
    let update = dom.render_immediate_to_vec();

    assert!(!update.edits.is_empty(), "banner was not re-rendered");
    assert!(!dom.in_runtime(|| consent.is_visible()));
    assert_eq!(shell.store.read(CONSENT_KEY).as_deref(), Some("true"));
}

#[test]
fn returning_visitor_never_sees_banner() {
    let accept = i18n::text("cookie-accept");
    let (_dom, _, first) = mount(MemoryStore::new().with_entry(CONSENT_KEY, "true"));
    assert!(!first.contains(&accept), "banner rendered after consent: {first}");
}
