//! Built-in document templates.
//!
//! Names end in `.html` so Tera applies the escape function to every
//! interpolated value.

/// Template name of the go-import document.
pub const GO_IMPORT: &str = "go-import.html";

/// Template name of the documentation redirect document.
pub const REDIRECT: &str = "redirect.html";

pub const GO_IMPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html><head>
<meta name="go-import" content="{{ import_path }} {{ vcs }} {{ repo }}">
</head></html>
"#;

pub const REDIRECT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html><head>
</head>
<body>
<a href="{{ url }}">Redirecting to documentation at {{ url }}</a>
</body>
</html>
"#;
