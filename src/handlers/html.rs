//! Server-rendered pages. Every user- or database-provided string passes
//! through [`escape`].

use std::fmt::Write;

use axum::http::StatusCode;

use crate::config::FormConfig;
use crate::middleware::session::SessionState;
use crate::service::{PropertyMap, SubmitOutcome};
use crate::types::AstCheckForm;

pub const PROPERTY_PLACEHOLDER: &str = "Select property";
pub const COMMENT_PLACEHOLDER: &str =
    "Please add in any comments you'd like to leave against the AST";
pub const PASSWORD_INCORRECT: &str = "Password incorrect! Please try again.";

const STYLE: &str = "body{font-family:sans-serif;max-width:44rem;margin:2rem auto;padding:0 1rem}\
h1{border-bottom:3px solid #7c3aed;padding-bottom:.3rem}\
label{display:block;margin-top:1rem;font-weight:600}\
select,textarea,input[type=password]{width:100%;padding:.4rem;box-sizing:border-box}\
table{border-collapse:collapse;margin-top:1rem;width:100%;color:#555}\
th,td{border:1px solid #ccc;padding:.3rem .5rem;text-align:left}\
.caption{color:#666;font-size:.9rem}\
.success{background:#e7f6ec;padding:.6rem}.error{background:#fde8e8;padding:.6rem}\
button{margin-top:1rem;margin-right:.5rem}";

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

pub fn login_page(options: &FormConfig, session: SessionState) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape(&options.title));
    body.push_str(
        "<form method=\"post\" action=\"/login\">\n\
         <label for=\"password\">Password</label>\n\
         <input type=\"password\" id=\"password\" name=\"password\" autofocus>\n\
         <button type=\"submit\">Log in</button>\n</form>\n",
    );
    if session == SessionState::Rejected {
        let _ = writeln!(body, "<p class=\"error\">{PASSWORD_INCORRECT}</p>");
        let _ = writeln!(
            body,
            "<p class=\"caption\">Email {} to report any system error.</p>",
            escape(&options.support_contact)
        );
    }
    layout(&options.title, &body)
}

/// Everything the form page needs for one render.
pub struct FormView<'a> {
    pub options: &'a FormConfig,
    pub properties: &'a PropertyMap,
    pub form: &'a AstCheckForm,
    pub feedback: Option<SubmitOutcome>,
}

pub fn form_page(view: &FormView<'_>) -> String {
    let FormView {
        options,
        properties,
        form,
        feedback,
    } = view;
    let check = form.to_check(properties, options);
    let mut body = String::new();

    let _ = writeln!(body, "<h1>{}</h1>", escape(&options.title));
    body.push_str("<form method=\"post\" action=\"/submit\">\n");

    body.push_str("<label for=\"property\">Property</label>\n<select id=\"property\" name=\"property\">\n");
    let _ = writeln!(
        body,
        "<option value=\"\"{}>{PROPERTY_PLACEHOLDER}</option>",
        selected(form.property.is_empty())
    );
    for (label, _) in properties.iter() {
        let _ = writeln!(
            body,
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(label),
            selected(label == form.property)
        );
    }
    body.push_str("</select>\n");
    if let Some(id) = form.selected_dwelling(properties) {
        let _ = writeln!(body, "<p class=\"caption\">Dwelling ID: {}</p>", escape(id));
    }

    select_field(
        &mut body,
        "academic_year",
        "Academic year",
        &options.academic_years,
        &check.academic_year,
    );
    select_field(
        &mut body,
        "checked_by",
        "AST checked by",
        &options.staff_initials,
        &check.checked_by,
    );

    let _ = writeln!(
        body,
        "<label for=\"comment\">Comments for AST</label>\n\
         <textarea id=\"comment\" name=\"comment\" rows=\"4\" placeholder=\"{}\">{}</textarea>",
        escape(COMMENT_PLACEHOLDER),
        escape(&form.comment)
    );

    let _ = writeln!(
        body,
        "<table class=\"preview\" aria-disabled=\"true\">\n\
         <tr><th>Dwelling ID</th><th>Academic year</th><th>Checked by</th><th>Comments</th></tr>\n\
         <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n</table>",
        escape(&check.dwelling_id),
        escape(&check.academic_year),
        escape(&check.checked_by),
        escape(&check.comment)
    );

    body.push_str(
        "<button type=\"submit\" formmethod=\"get\" formaction=\"/\">Preview</button>\n\
         <button type=\"submit\">Submit</button>\n</form>\n",
    );

    if let Some(outcome) = feedback {
        let class = if outcome.is_success() { "success" } else { "error" };
        let _ = writeln!(body, "<p class=\"{class}\">{}</p>", escape(outcome.message()));
    }

    body.push_str(
        "<form method=\"post\" action=\"/logout\"><button type=\"submit\">Log out</button></form>\n",
    );
    layout(&options.title, &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{}</h1>\n<p class=\"error\">{}</p>\n",
        escape(title),
        escape(message)
    );
    layout(title, &body)
}

fn select_field(body: &mut String, name: &str, label: &str, options: &[String], current: &str) {
    let _ = writeln!(
        body,
        "<label for=\"{name}\">{label}</label>\n<select id=\"{name}\" name=\"{name}\">"
    );
    for option in options {
        let _ = writeln!(
            body,
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(option),
            selected(option == current)
        );
    }
    body.push_str("</select>\n");
}

fn selected(on: bool) -> &'static str {
    if on { " selected" } else { "" }
}
