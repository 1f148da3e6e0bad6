//! HTML rendering. Pages are built from plain view values; the calendar page
//! itself is a template file with placeholders.

use crate::forms::BookingFormView;
use crate::types::Booking;
use axum::response::Html;
use chrono::NaiveDate;

pub const SLOTS_PLACEHOLDER: &str = "{{ available_time_slots_json }}";
pub const TODAY_PLACEHOLDER: &str = "{{ today_iso }}";
pub const TITLE_PLACEHOLDER: &str = "{{ website_title }}";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn calendar_page(
    template: &str,
    website_title: &str,
    slots_json: &str,
    today: NaiveDate,
) -> Html<String> {
    Html(
        template
            .replace(TITLE_PLACEHOLDER, &escape_html(website_title))
            .replace(SLOTS_PLACEHOLDER, slots_json)
            .replace(TODAY_PLACEHOLDER, &today.format("%Y-%m-%d").to_string()),
    )
}

fn layout(website_title: &str, page_title: &str, body: &str) -> Html<String> {
    let website_title = escape_html(website_title);
    let page_title = escape_html(page_title);
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{page_title} | {website_title}</title>
</head>
<body>
  <header><a href="/">{website_title}</a></header>
  <main>
    <h1>{page_title}</h1>
{body}
  </main>
</body>
</html>
"#
    ))
}

pub fn booking_form(website_title: &str, view: &BookingFormView) -> Html<String> {
    let mut body = String::new();
    if !view.errors.non_field.is_empty() {
        body.push_str("    <ul class=\"errorlist nonfield\">\n");
        for message in &view.errors.non_field {
            body.push_str(&format!("      <li>{}</li>\n", escape_html(message)));
        }
        body.push_str("    </ul>\n");
    }
    body.push_str(&format!(
        "    <form method=\"post\" action=\"{}\">\n",
        escape_html(&view.action)
    ));
    body.push_str("      <label for=\"id_name\">Name</label>\n");
    for message in view.errors.for_field("name") {
        body.push_str(&format!(
            "      <span class=\"errorlist\">{}</span>\n",
            escape_html(message)
        ));
    }
    body.push_str(&format!(
        "      <input type=\"text\" name=\"name\" id=\"id_name\" maxlength=\"100\" placeholder=\"Name\" required value=\"{}\">\n",
        escape_html(&view.name)
    ));
    body.push_str("      <button type=\"submit\">Book</button>\n    </form>");
    layout(website_title, &view.page_title, &body)
}

pub fn booking_error(website_title: &str, message: &str) -> Html<String> {
    let body = format!(
        "    <p class=\"error\">{}</p>\n    <p><a href=\"/\">Back to the calendar</a></p>",
        escape_html(message)
    );
    layout(website_title, "Booking not possible", &body)
}

pub fn booking_complete(website_title: &str, booking: &Booking) -> Html<String> {
    let body = format!(
        r#"    <dl>
      <dt>Name</dt><dd>{}</dd>
      <dt>Date</dt><dd>{}</dd>
      <dt>Time</dt><dd>{}</dd>
      <dt>Booked at</dt><dd>{}</dd>
    </dl>
    <p><a href="/">Back to the calendar</a></p>"#,
        escape_html(&booking.name),
        booking.date.format("%Y-%m-%d"),
        escape_html(&booking.time_slot),
        booking.booked_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );
    layout(website_title, "Booking complete", &body)
}

pub fn not_found(website_title: &str) -> Html<String> {
    layout(
        website_title,
        "Not found",
        "    <p>The requested booking does not exist.</p>",
    )
}

pub fn server_error(website_title: &str) -> Html<String> {
    layout(
        website_title,
        "Something went wrong",
        "    <p>Please try again later.</p>",
    )
}
