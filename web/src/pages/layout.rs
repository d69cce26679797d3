/// Document-level metadata rendered into `<head>`.
#[derive(Debug, Clone, Copy)]
pub struct Metadata {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SITE_METADATA: Metadata = Metadata {
    title: "SocialX Advanced",
    description: "A modern social platform with AI-powered features",
};

const STYLES: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; }
main { min-height: 100vh; background: linear-gradient(to bottom right, #eff6ff, #e0e7ff); }
.container { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; text-align: center; }
h1 { font-size: 2.25rem; font-weight: 700; color: #111827; margin-bottom: 1rem; }
.lead { font-size: 1.25rem; color: #4b5563; margin-bottom: 2rem; }
.grid { display: grid; gap: 1.5rem; max-width: 56rem; margin: 0 auto; }
@media (min-width: 768px) { .grid { grid-template-columns: repeat(3, 1fr); } }
.card { background: #fff; border-radius: 0.5rem; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); padding: 1.5rem; }
.card h2 { font-size: 1.5rem; font-weight: 600; color: #1f2937; margin: 0 0 0.75rem; }
.card p { color: #4b5563; margin: 0; }
.status { margin-top: 3rem; color: #6b7280; }
"#;

/// Wraps a page body in the root document shell.
pub fn render(metadata: Metadata, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<style>{STYLES}</style>
</head>
<body>{body}</body>
</html>
"#,
        title = metadata.title,
        description = metadata.description,
    )
}
