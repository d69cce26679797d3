use super::layout::{self, SITE_METADATA};
use std::{fmt::Write, sync::LazyLock};

struct Feature {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🚀",
        title: "Modern Stack",
        blurb: "Built with Rust, axum and tokio for fast, safe services",
    },
    Feature {
        icon: "🤖",
        title: "AI-Powered",
        blurb: "Intelligent features powered by advanced machine learning",
    },
    Feature {
        icon: "☁️",
        title: "Cloud Native",
        blurb: "Scalable architecture designed for modern cloud infrastructure",
    },
];

static HOME_PAGE: LazyLock<String> = LazyLock::new(render);

/// The landing page never changes, so it is rendered once.
pub fn page() -> &'static str {
    HOME_PAGE.as_str()
}

fn render() -> String {
    let mut cards = String::new();
    for feature in &FEATURES {
        let _ = write!(
            cards,
            r#"<div class="card"><h2>{} {}</h2><p>{}</p></div>"#,
            feature.icon, feature.title, feature.blurb
        );
    }

    let body = format!(
        r#"<main><div class="container">
<h1>Welcome to {title}</h1>
<p class="lead">A modern, scalable social platform with AI-powered features</p>
<div class="grid">{cards}</div>
<div class="status"><p>Infrastructure is running • Check the README for development setup</p></div>
</div></main>"#,
        title = SITE_METADATA.title,
    );

    layout::render(SITE_METADATA, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_shell_and_metadata() {
        let html = page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>SocialX Advanced</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="A modern social platform with AI-powered features">"#
        ));
    }

    #[test]
    fn renders_every_feature_card() {
        let html = page();

        assert!(html.contains("Welcome to SocialX Advanced"));
        for feature in &FEATURES {
            assert!(html.contains(feature.title), "missing {}", feature.title);
        }
        assert_eq!(html.matches(r#"class="card""#).count(), FEATURES.len());
    }
}
