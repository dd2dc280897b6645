//! Static HTML page writer for the portfolio website.
//!
//! The page is a fixed skeleton: doctype, head with charset + viewport meta and a title,
//! then a heading and a `<pre>` block holding the body text.

use std::borrow::Cow;

use bytes::Bytes;

use crate::synthesis::templates::fill_template;

const PAGE_TEMPLATE: &str = "<!DOCTYPE html>
<html lang='en'>
<head>
  <meta charset='UTF-8'>
  <meta name='viewport' content='width=device-width, initial-scale=1.0'>
  <title>{title}</title>
</head>
<body>

<h1>{heading}</h1>

<pre>
{body}
</pre>

</body>
</html>
";

/// Escapes the characters that would otherwise be read as markup.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Builds the page. With `escape` off every value is embedded verbatim.
pub fn html_page(title: &str, heading: &str, body: &str, escape: bool) -> String {
    let field = |value: &str| {
        if escape {
            escape_html(value).into_owned()
        } else {
            value.to_string()
        }
    };

    let (title, heading, body) = (field(title), field(heading), field(body));

    fill_template(
        PAGE_TEMPLATE,
        &[
            ("title", title.as_str()),
            ("heading", heading.as_str()),
            ("body", body.as_str()),
        ],
    )
}

/// Serializes a finished page as UTF-8 bytes.
pub fn render_html(page: &str) -> Bytes {
    Bytes::copy_from_slice(page.as_bytes())
}
