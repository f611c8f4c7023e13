//! The document title follows the visitor's language.
//!
//! Kept in its own test binary: it switches the shared loader to Spanish.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::document::{Document, Eval, NoOpDocument};
use dioxus::prelude::*;
use ui::components::SiteTitle;
use ui::core::storage::{MemoryStore, Preferences, LANGUAGE_KEY};
use ui::i18n::{self, Language, LocaleContext};

/// Document that records every title it is given.
struct TitleLog(Rc<RefCell<Vec<String>>>);

impl Document for TitleLog {
    fn eval(&self, js: String) -> Eval {
        NoOpDocument.eval(js)
    }

    fn set_title(&self, title: String) {
        self.0.borrow_mut().push(title);
    }
}

#[derive(Clone, Default)]
struct Harness {
    titles: Rc<RefCell<Vec<String>>>,
    locale: Rc<RefCell<Option<LocaleContext>>>,
}

fn app(harness: Harness) -> Element {
    let titles = harness.titles.clone();
    use_context_provider(move || Rc::new(TitleLog(titles)) as Rc<dyn Document>);
    let locale = use_context_provider(|| {
        let store = MemoryStore::new().with_entry(LANGUAGE_KEY, "en");
        LocaleContext::new(Preferences::new(store), Language::En)
    });
    use_hook(|| *harness.locale.borrow_mut() = Some(locale));

    rsx! { SiteTitle {} }
}

#[test]
fn title_follows_language_switch() {
    let harness = Harness::default();
    let mut dom = VirtualDom::new_with_props(app, harness.clone());
    dom.rebuild_in_place();

    let english = i18n::text("site-title");
    assert_eq!(*harness.titles.borrow(), vec![english.clone()]);

    let mut locale = harness.locale.borrow().clone().expect("locale provided");
    dom.in_runtime(|| locale.set(Language::Es));
    dom.render_immediate_to_vec();

    let spanish = i18n::text("site-title");
    assert_ne!(english, spanish);
    assert_eq!(*harness.titles.borrow(), vec![english, spanish]);
}
