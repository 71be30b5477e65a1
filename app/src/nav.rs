//! Static navigation data consumed by the site header.
//!
//! The header renders two dropdown groups ("Product" and "Learn") from the
//! collections defined here, alongside a handful of fixed external links.
//! Everything in this module is read-only; the header never mutates it.

use icondata::Icon;

/// A single navigation entry. When `icon` is present it is rendered ahead of
/// the label inside dropdown panels.
#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Option<Icon>,
}

/// Query suffix appended to navigation calls to action so traffic arriving
/// through the header can be attributed.
pub const NAV_REF_QUERY: &str = "?ref=nav";

pub const REPO_URL: &str = "https://github.com/skylark-dev/skylark";
pub const DISCORD_URL: &str = "https://discord.gg/skylark";
pub const X_URL: &str = "https://x.com/skylarkdev";
pub const APP_LOGIN_URL: &str = "https://app.skylark.dev/login";
pub const APP_SIGNUP_URL: &str = "https://app.skylark.dev/sign-up";

/// Tags `href` with the navigation attribution query.
#[must_use]
pub fn nav_ref(href: &str) -> String {
    format!("{href}{NAV_REF_QUERY}")
}

const PRODUCT_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Functions",
        href: "/#functions",
        icon: Some(icondata::BsLightningCharge),
    },
    NavLink {
        label: "Scheduling",
        href: "/#scheduling",
        icon: Some(icondata::BsClockHistory),
    },
    NavLink {
        label: "Event streams",
        href: "/#events",
        icon: Some(icondata::BsDiagram3),
    },
    NavLink {
        label: "Observability",
        href: "/#observability",
        icon: Some(icondata::BsEye),
    },
];

const LEARN_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Documentation",
        href: "https://docs.skylark.dev",
        icon: Some(icondata::BsBook),
    },
    NavLink {
        label: "Guides",
        href: "https://docs.skylark.dev/guides",
        icon: Some(icondata::BsCompass),
    },
    NavLink {
        label: "API reference",
        href: "https://docs.skylark.dev/reference",
        icon: Some(icondata::BsBraces),
    },
];

/// Entries for the "Product" dropdown group.
#[must_use]
pub fn product_links() -> &'static [NavLink] {
    &PRODUCT_LINKS
}

/// Entries for the "Learn" dropdown group.
#[must_use]
pub fn learn_links() -> &'static [NavLink] {
    &LEARN_LINKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_ref_appends_the_attribution_query() {
        assert_eq!(nav_ref("/pricing"), "/pricing?ref=nav");
        assert_eq!(nav_ref("/blog"), "/blog?ref=nav");
        assert_eq!(nav_ref("/sign-up"), "/sign-up?ref=nav");
    }

    #[test]
    fn nav_ref_tags_external_urls_too() {
        assert_eq!(
            nav_ref(APP_LOGIN_URL),
            "https://app.skylark.dev/login?ref=nav"
        );
    }

    #[test]
    fn link_groups_are_populated() {
        assert!(!product_links().is_empty());
        assert!(!learn_links().is_empty());
        for link in product_links().iter().chain(learn_links()) {
            assert!(!link.label.is_empty());
            assert!(
                link.href.starts_with('/') || link.href.starts_with("https://"),
                "unexpected href: {}",
                link.href
            );
        }
    }

    #[test]
    fn external_urls_are_https() {
        for url in [REPO_URL, DISCORD_URL, X_URL, APP_LOGIN_URL, APP_SIGNUP_URL] {
            assert!(url.starts_with("https://"));
        }
    }
}
