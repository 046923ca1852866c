use regex::Regex;
use std::collections::HashSet;
use log::{debug, info};

use crate::enrichment::TitleLookup;
use crate::models::{Contact, SearchResult, BLANK_PLACEHOLDER};

pub struct Extractor {
    email_regex: Regex,
    profile_regex: Regex,
}

impl Extractor {
    pub fn new() -> Self {
        Extractor {
            // local@domain.tld; word chars, dots and hyphens on either side
            email_regex: Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("static email pattern"),
            profile_regex: Regex::new(r"/in/([\w-]+)").expect("static profile pattern"),
        }
    }

    /// First email-shaped substring of the snippet, as written.
    pub fn extract_email(&self, snippet: &str) -> Option<String> {
        self.email_regex.find(snippet).map(|m| m.as_str().to_string())
    }

    /// Display name derived from the `/in/<slug>` part of a profile link.
    pub fn extract_name(&self, link: &str) -> Option<String> {
        self.profile_regex
            .captures(link)
            .and_then(|cap| cap.get(1))
            .map(|slug| title_case(&slug.as_str().replace('-', " ")))
    }

    /// Turns organic results into contacts, in result order. Entries without
    /// an email, or repeating an email already seen in this pass, are dropped
    /// and never reach the title lookup.
    pub fn extract_contacts(&self, results: &[SearchResult], lookup: &dyn TitleLookup) -> Vec<Contact> {
        let mut contacts = Vec::new();
        let mut seen = HashSet::new();

        for result in results {
            let email = match self.extract_email(&result.snippet) {
                Some(email) => email,
                None => {
                    debug!("No email in snippet for {}", result.link);
                    continue;
                }
            };
            if !seen.insert(email.clone()) {
                debug!("Skipping repeated email {} from {}", email, result.link);
                continue;
            }

            let name = self
                .extract_name(&result.link)
                .unwrap_or_else(|| BLANK_PLACEHOLDER.to_string());
            let job_title = lookup.job_title(&email);

            contacts.push(Contact {
                name,
                email,
                job_title,
                profile_link: result.link.clone(),
            });
        }

        info!("Extracted {} contacts from {} results", contacts.len(), results.len());
        contacts
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper-cases a cased letter that follows an uncased character and
/// lower-cases the ones after it, so `jane doe 1a2b` becomes `Jane Doe 1A2B`.
/// Uncased letters (CJK and the like) pass through and reset the run. Digraphs
/// such as `ǆ` get their full upper-case form, since std has no titlecase mapping.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;

    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if !cased {
            out.push(c);
        } else if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = cased;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FixedTitle {
        title: &'static str,
        calls: RefCell<Vec<String>>,
    }

    impl FixedTitle {
        fn new(title: &'static str) -> Self {
            FixedTitle { title, calls: RefCell::new(Vec::new()) }
        }
    }

    impl TitleLookup for FixedTitle {
        fn job_title(&self, email: &str) -> String {
            self.calls.borrow_mut().push(email.to_string());
            self.title.to_string()
        }
    }

    fn result(link: &str, snippet: &str) -> SearchResult {
        SearchResult { link: link.to_string(), snippet: snippet.to_string() }
    }

    #[test]
    fn test_email_first_match_wins() {
        let ex = Extractor::new();
        assert_eq!(
            ex.extract_email("write to a.b@one.com or c@two.org"),
            Some("a.b@one.com".to_string())
        );
        assert_eq!(ex.extract_email("no address here"), None);
        assert_eq!(ex.extract_email("half an address user@host"), None);
    }

    #[test]
    fn test_email_case_is_preserved() {
        let ex = Extractor::new();
        assert_eq!(ex.extract_email("Mail: Jane.Doe@Gmail.com"), Some("Jane.Doe@Gmail.com".to_string()));
    }

    #[test]
    fn test_name_from_profile_slug() {
        let ex = Extractor::new();
        assert_eq!(ex.extract_name("https://ke.linkedin.com/in/jane-doe"), Some("Jane Doe".to_string()));
        assert_eq!(
            ex.extract_name("https://www.linkedin.com/in/john-mwangi-4b1a2c3d/"),
            Some("John Mwangi 4B1A2C3D".to_string())
        );
        assert_eq!(ex.extract_name("https://www.instagram.com/jane.doe/"), None);
    }

    #[test]
    fn test_title_case_lowercases_tail() {
        assert_eq!(title_case("mARY o'neil"), "Mary O'Neil");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_uncased_letters_start_a_new_word() {
        assert_eq!(title_case("李a"), "李A");
        assert_eq!(title_case("wanjiru 王伟 otieno"), "Wanjiru 王伟 Otieno");
        assert_eq!(title_case("émile zola"), "Émile Zola");
    }

    #[test]
    fn test_extract_contacts_scenario() {
        let ex = Extractor::new();
        let lookup = FixedTitle::new("Marketer");
        let link = "https://ke.linkedin.com/in/jane-doe";
        let contacts = ex.extract_contacts(
            &[result(link, "Contact me at jane.doe@gmail.com for info")],
            &lookup,
        );
        assert_eq!(
            contacts,
            vec![Contact {
                name: "Jane Doe".to_string(),
                email: "jane.doe@gmail.com".to_string(),
                job_title: "Marketer".to_string(),
                profile_link: link.to_string(),
            }]
        );
    }

    #[test]
    fn test_entries_without_email_are_dropped_and_not_enriched() {
        let ex = Extractor::new();
        let lookup = FixedTitle::new("CEO");
        let results = [
            result("https://www.linkedin.com/in/first-one", "first@a.com"),
            result("https://www.linkedin.com/in/second", "nothing to see"),
            result("https://www.instagram.com/third", "reach third@b.co.ke today"),
        ];
        let contacts = ex.extract_contacts(&results, &lookup);

        let emails: Vec<&str> = contacts.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails, vec!["first@a.com", "third@b.co.ke"]);
        assert_eq!(*lookup.calls.borrow(), vec!["first@a.com".to_string(), "third@b.co.ke".to_string()]);
        assert_eq!(contacts[1].name, BLANK_PLACEHOLDER);
    }

    #[test]
    fn test_repeated_email_keeps_first_entry() {
        let ex = Extractor::new();
        let lookup = FixedTitle::new(BLANK_PLACEHOLDER);
        let results = [
            result("https://www.linkedin.com/in/a", "x@y.com"),
            result("https://www.linkedin.com/in/b", "again x@y.com"),
        ];
        let contacts = ex.extract_contacts(&results, &lookup);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "A");
        assert_eq!(lookup.calls.borrow().len(), 1);
    }
}
