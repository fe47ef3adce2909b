use serde::Deserialize;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("brand name is empty")]
    EmptyBrand,
    #[error("social link {label} has unsupported url {url}")]
    BadSocialUrl { label: String, url: String },
    #[error("contact email {0} is not an address")]
    BadEmail(String),
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Code,
    Brain,
    Briefcase,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Linkedin,
    Github,
    Instagram,
    Email,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub caption: String,
    pub url: String,
}

impl SocialLink {
    /// Web profiles open in a new browsing context, mail links do not.
    pub fn opens_new_context(&self) -> bool {
        self.url.starts_with("https://")
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Contact {
    pub email: String,
    pub address: Vec<String>,
    pub company_id: String,
    pub vat: String,
    pub subject: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn mailto_with_subject(&self) -> String {
        format!("mailto:{}?subject={}", self.email, urlencoding::encode(&self.subject))
    }

    pub fn registration(&self) -> String {
        format!("ID: {} | VAT: {}", self.company_id, self.vat)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub tagline: String,
    pub founder: String,
    pub about: String,
    pub services: Vec<Service>,
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub connect_note: Vec<String>,
    pub contact: Contact,
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(config::SITE_JSON)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.brand.trim().is_empty() {
            return Err(ContentError::EmptyBrand);
        }
        if let Some(bad) = self
            .socials
            .iter()
            .find(|s| !(s.url.starts_with("https://") || s.url.starts_with("mailto:")))
        {
            return Err(ContentError::BadSocialUrl {
                label: bad.label.clone(),
                url: bad.url.clone(),
            });
        }
        if !self.contact.email.contains('@') {
            return Err(ContentError::BadEmail(self.contact.email.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> serde_json::Value {
        serde_json::from_str(config::SITE_JSON).unwrap()
    }

    #[test]
    fn embedded_content_is_valid() {
        let site = SiteContent::embedded().unwrap();
        assert_eq!(site.brand, "Minimal Code");
        assert_eq!(site.services.len(), 3);
        assert_eq!(site.services[1].icon, ServiceIcon::Brain);
        assert_eq!(site.socials.len(), 4);
        assert_eq!(site.contact.registration(), "ID: 65573407 | VAT: 111658803");
    }

    #[test]
    fn only_web_profiles_open_new_context() {
        let site = SiteContent::embedded().unwrap();
        let opening: Vec<_> = site
            .socials
            .iter()
            .filter(|s| s.opens_new_context())
            .map(|s| s.kind)
            .collect();
        assert_eq!(opening, vec![SocialKind::Linkedin, SocialKind::Github, SocialKind::Instagram]);
    }

    #[test]
    fn mailto_subject_is_encoded() {
        let site = SiteContent::embedded().unwrap();
        assert_eq!(site.contact.mailto(), "mailto:nash.radovanovich@gmail.com");
        assert_eq!(
            site.contact.mailto_with_subject(),
            "mailto:nash.radovanovich@gmail.com?subject=Inquiry%20from%20Minimal%20Code%20Website"
        );
    }

    #[test]
    fn rejects_empty_brand() {
        let mut doc = sample();
        doc["brand"] = "  ".into();
        let err = SiteContent::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::EmptyBrand));
    }

    #[test]
    fn rejects_plain_http_social() {
        let mut doc = sample();
        doc["socials"][1]["url"] = "http://github.com/nesaplay".into();
        match SiteContent::from_json(&doc.to_string()) {
            Err(ContentError::BadSocialUrl { label, .. }) => assert_eq!(label, "GitHub"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_email() {
        let mut doc = sample();
        doc["contact"]["email"] = "nobody".into();
        assert!(matches!(
            SiteContent::from_json(&doc.to_string()),
            Err(ContentError::BadEmail(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(SiteContent::from_json("{"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn unknown_icon_is_a_parse_error() {
        let mut doc = sample();
        doc["services"][0]["icon"] = "rocket".into();
        assert!(matches!(
            SiteContent::from_json(&doc.to_string()),
            Err(ContentError::Parse(_))
        ));
    }
}
