// SPDX-License-Identifier: MPL-2.0
//! Markup for the FAQ page.
//!
//! Rendering is a pure function of the fetched FAQ list, the translation
//! catalog, and the request locale. Each entry becomes a `<details>` element,
//! so expand/collapse state lives in the browser per row with no script:
//! every row starts collapsed and toggles independently.
//!
//! Answers are inserted as raw markup. The CMS is the trust boundary here:
//! anyone who can author FAQ content can inject HTML into this page.
//! Questions, labels, and titles are escaped.

use crate::cms::FaqItem;
use crate::i18n::fluent::I18n;
use std::fmt::Write;
use unic_langid::LanguageIdentifier;

pub fn render_page(i18n: &I18n, locale: &LanguageIdentifier, faqs: &[FaqItem]) -> String {
    let title = escape(&i18n.tr(locale, "faq"));
    let description = escape(&i18n.tr(locale, "page-description"));

    let mut switcher = String::new();
    for available in i18n.available_locales() {
        if available == locale {
            continue;
        }
        let code = escape(&available.to_string());
        let _ = write!(switcher, "<a href=\"/{}\">{}</a>", code, code);
    }

    let mut rows = String::new();
    for faq in faqs {
        let _ = write!(
            rows,
            "<details class=\"faq-item\">\
             <summary class=\"faq-row\"><h2>{}</h2><span class=\"faq-button\">+</span></summary>\
             <div class=\"faq-content\"><p>{}</p></div>\
             </details>",
            escape(&faq.attributes.question),
            faq.attributes.answer,
        );
    }

    format!(
        "<!doctype html><html lang=\"{lang}\"><head><meta charset=\"utf-8\">\
         <title>{title}</title>\
         <meta name=\"description\" content=\"{description}\">\
         <link rel=\"icon\" href=\"/favicon.ico\">\
         </head><body>\
         <main class=\"main\">\
         <h1 class=\"faq-title\">{title}</h1>\
         <div class=\"locale-wrapper\">{switcher}</div>\
         <div class=\"faq-container\">{rows}</div>\
         </main></body></html>",
        lang = escape(&locale.to_string()),
        title = title,
        description = description,
        switcher = switcher,
        rows = rows,
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
