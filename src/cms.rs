// SPDX-License-Identifier: MPL-2.0
//! Read-only client for the headless CMS that owns the FAQ entries.
//!
//! The CMS exposes the collection at `<api_url>/api/faqs?locale=<locale>`
//! behind a bearer token and answers with the usual envelope:
//!
//! ```json
//! { "data": [ { "id": 1, "attributes": { "question": "...", "answer": "...",
//!   "createdAt": "...", "publishedAt": "...", "updatedAt": "..." } } ] }
//! ```
//!
//! Entries come back in the CMS's display order and are kept in that order.

use crate::config::Config;
use crate::error::{Error, FetchError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use unic_langid::LanguageIdentifier;

/// One question/answer pair. The answer may carry HTML markup authored in
/// the CMS; it is passed through to the renderer untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FaqItem {
    pub id: i64,
    pub attributes: Faq,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FaqDocument {
    pub data: Vec<FaqItem>,
}

pub struct CmsClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl CmsClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("faqboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_url()?.trim_end_matches('/').to_string(),
            token: config.api_token()?.to_string(),
        })
    }

    /// Issues the single authenticated read for one locale.
    ///
    /// No retry and no request timeout; any failure is surfaced as a
    /// [`FetchError`] for the caller to log and turn into a server error.
    pub async fn fetch_faqs(
        &self,
        locale: &LanguageIdentifier,
    ) -> std::result::Result<Vec<FaqItem>, FetchError> {
        let url = faq_url(&self.base_url, locale);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let document: FaqDocument = response
            .json()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;
        Ok(document.data)
    }
}

/// Collection URL for one locale, kept separate so the parameterization is
/// testable without a live endpoint.
pub fn faq_url(base_url: &str, locale: &LanguageIdentifier) -> String {
    format!("{}/api/faqs?locale={}", base_url, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE: &str = r#"{
        "data": [
            {
                "id": 7,
                "attributes": {
                    "question": "How do I reset my password?",
                    "answer": "<p>Use the <b>reset</b> link.</p>",
                    "createdAt": "2023-01-05T09:00:00.000Z",
                    "publishedAt": "2023-01-06T10:30:00.000Z",
                    "updatedAt": "2023-02-01T08:15:00.000Z"
                }
            },
            {
                "id": 3,
                "attributes": {
                    "question": "Is there a free tier?",
                    "answer": "Yes.",
                    "createdAt": "2023-01-05T09:05:00.000Z",
                    "publishedAt": "2023-01-06T10:31:00.000Z",
                    "updatedAt": "2023-01-06T10:31:00.000Z"
                }
            }
        ]
    }"#;

    #[test]
    fn envelope_decodes_with_camel_case_timestamps() {
        let document: FaqDocument = serde_json::from_str(ENVELOPE).expect("failed to decode");
        assert_eq!(document.data.len(), 2);
        let first = &document.data[0];
        assert_eq!(first.id, 7);
        assert_eq!(first.attributes.question, "How do I reset my password?");
        assert_eq!(first.attributes.answer, "<p>Use the <b>reset</b> link.</p>");
        assert_eq!(
            first.attributes.created_at,
            "2023-01-05T09:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn envelope_preserves_cms_order() {
        let document: FaqDocument = serde_json::from_str(ENVELOPE).expect("failed to decode");
        let ids: Vec<i64> = document.data.iter().map(|item| item.id).collect();
        // Not re-sorted: id 7 was first on the wire and stays first.
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn envelope_with_no_entries_decodes_to_empty_list() {
        let document: FaqDocument =
            serde_json::from_str(r#"{"data": []}"#).expect("failed to decode");
        assert!(document.data.is_empty());
    }

    #[test]
    fn faq_url_carries_the_locale_parameter() {
        let locale: LanguageIdentifier = "fr".parse().unwrap();
        assert_eq!(
            faq_url("https://cms.example.org", &locale),
            "https://cms.example.org/api/faqs?locale=fr"
        );
    }

    #[test]
    fn faq_url_for_every_configured_locale_uses_that_code() {
        for code in ["en", "fr"] {
            let locale: LanguageIdentifier = code.parse().unwrap();
            let url = faq_url("https://cms.example.org", &locale);
            assert!(url.ends_with(&format!("?locale={}", code)));
        }
    }
}
