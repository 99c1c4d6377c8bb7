//! Translation keys used by the landing page markup.
//!
//! Every bundled language is expected to define all of these; the
//! `i18n_missing_keys` integration test keeps the `.ftl` files honest.

pub const HERO_BADGE: &str = "hero.badge";
pub const HERO_TITLE: &str = "hero.title";
pub const HERO_SUBTITLE: &str = "hero.subtitle";
pub const HERO_GITHUB: &str = "hero.github";
pub const HERO_LEARN_MORE: &str = "hero.learnMore";

pub const ABOUT_TITLE: &str = "about.title";
pub const ABOUT_TEXT1: &str = "about.text1";
pub const ABOUT_TEXT2: &str = "about.text2";
pub const ABOUT_STAT1_VALUE: &str = "about.stat1.value";
pub const ABOUT_STAT1_LABEL: &str = "about.stat1.label";
pub const ABOUT_STAT2_VALUE: &str = "about.stat2.value";
pub const ABOUT_STAT2_LABEL: &str = "about.stat2.label";
pub const ABOUT_STAT3_VALUE: &str = "about.stat3.value";
pub const ABOUT_STAT3_LABEL: &str = "about.stat3.label";

pub const FEATURES_TITLE: &str = "features.title";
pub const FEATURES_SUBTITLE: &str = "features.subtitle";
pub const FEATURES_F1_TITLE: &str = "features.f1.title";
pub const FEATURES_F1_TEXT: &str = "features.f1.text";
pub const FEATURES_F2_TITLE: &str = "features.f2.title";
pub const FEATURES_F2_TEXT: &str = "features.f2.text";
pub const FEATURES_F3_TITLE: &str = "features.f3.title";
pub const FEATURES_F3_TEXT: &str = "features.f3.text";
pub const FEATURES_F4_TITLE: &str = "features.f4.title";
pub const FEATURES_F4_TEXT: &str = "features.f4.text";
pub const FEATURES_F5_TITLE: &str = "features.f5.title";
pub const FEATURES_F5_TEXT: &str = "features.f5.text";
pub const FEATURES_F6_TITLE: &str = "features.f6.title";
pub const FEATURES_F6_TEXT: &str = "features.f6.text";

pub const SCREENSHOTS_TITLE: &str = "screenshots.title";
pub const SCREENSHOTS_SUBTITLE: &str = "screenshots.subtitle";
pub const SCREENSHOTS_S1: &str = "screenshots.s1";
pub const SCREENSHOTS_S2: &str = "screenshots.s2";
pub const SCREENSHOTS_S3: &str = "screenshots.s3";

pub const TECH_TITLE: &str = "tech.title";

pub const CTA_TITLE: &str = "cta.title";
pub const CTA_TEXT: &str = "cta.text";
pub const CTA_BUTTON: &str = "cta.button";

pub const FOOTER_TEXT: &str = "footer.text";
pub const FOOTER_WEBSITE: &str = "footer.website";
pub const FOOTER_LICENSE: &str = "footer.license";

/// Every key the page renders. This is the contract between catalog and markup.
pub const ALL: [&str; 40] = [
    HERO_BADGE,
    HERO_TITLE,
    HERO_SUBTITLE,
    HERO_GITHUB,
    HERO_LEARN_MORE,
    ABOUT_TITLE,
    ABOUT_TEXT1,
    ABOUT_TEXT2,
    ABOUT_STAT1_VALUE,
    ABOUT_STAT1_LABEL,
    ABOUT_STAT2_VALUE,
    ABOUT_STAT2_LABEL,
    ABOUT_STAT3_VALUE,
    ABOUT_STAT3_LABEL,
    FEATURES_TITLE,
    FEATURES_SUBTITLE,
    FEATURES_F1_TITLE,
    FEATURES_F1_TEXT,
    FEATURES_F2_TITLE,
    FEATURES_F2_TEXT,
    FEATURES_F3_TITLE,
    FEATURES_F3_TEXT,
    FEATURES_F4_TITLE,
    FEATURES_F4_TEXT,
    FEATURES_F5_TITLE,
    FEATURES_F5_TEXT,
    FEATURES_F6_TITLE,
    FEATURES_F6_TEXT,
    SCREENSHOTS_TITLE,
    SCREENSHOTS_SUBTITLE,
    SCREENSHOTS_S1,
    SCREENSHOTS_S2,
    SCREENSHOTS_S3,
    TECH_TITLE,
    CTA_TITLE,
    CTA_TEXT,
    CTA_BUTTON,
    FOOTER_TEXT,
    FOOTER_WEBSITE,
    FOOTER_LICENSE,
];

/// Fluent message identifier for a translation key.
///
/// Fluent identifiers may not contain `.`, so `hero.title` is stored as `hero-title`.
pub fn fluent_id(key: &str) -> String {
    key.replace('.', "-")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keys_are_unique() {
        let unique: HashSet<_> = ALL.iter().collect();
        assert_eq!(unique.len(), ALL.len());
    }

    #[test]
    fn fluent_ids_stay_distinct() {
        let ids: HashSet<_> = ALL.iter().map(|k| fluent_id(k)).collect();
        assert_eq!(ids.len(), ALL.len());
        assert_eq!(fluent_id(HERO_LEARN_MORE), "hero-learnMore");
    }
}
