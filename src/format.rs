use crate::model::{PaperEntry, Report};

const REPORT_TITLE: &str = "arXiv Automatic Search Results";

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>arXiv Automatic Search Results</title>
    <style>
        .toggle-content {
            display: none;
            margin-left: 20px;
        }
        .toggle-button {
            cursor: pointer;
            font-size: 1.5em;
        }
        .toggle-button::before {
            content: "\25B6";
            display: inline-block;
            margin-right: 6px;
        }
        .toggle-button.active::before {
            content: "\25BC";
        }
    </style>
    <script>
        function toggleContent(id) {
            var content = document.getElementById(id);
            var button = content.previousElementSibling;
            if (content.style.display !== "block") {
                content.style.display = "block";
                button.classList.add("active");
            } else {
                content.style.display = "none";
                button.classList.remove("active");
            }
        }
    </script>
</head>
"#;

const TAIL: &str = "    </ol>\n</body>\n</html>\n";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c)
        }
    }
    out
}

pub struct Formatter;

impl Formatter {
    pub fn to_html_item(idx: usize, data: &PaperEntry) -> String {
        let content_id = format!("content-{}", idx);
        format!(
            concat!(
                "    <li>\n",
                "        <div class=\"toggle-button\" onclick=\"toggleContent('{id}')\">{title}</div>\n",
                "        <div id=\"{id}\" class=\"toggle-content\">\n",
                "            <p><strong>Published:</strong> {published}</p>\n",
                "            <p><strong>Abstract:</strong> {summary}</p>\n",
                "            <p><a href=\"{pdf}\" target=\"_blank\">Download PDF</a></p>\n",
                "        </div>\n",
                "    </li>\n"
            ),
            id = content_id,
            title = escape_html(&data.title),
            published = escape_html(&data.published),
            summary = escape_html(&data.summary),
            pdf = escape_html(&data.pdf_link())
        )
    }

    pub fn to_html_report(report: &Report, max_results: u32) -> String {
        let mut html = String::with_capacity(HEAD.len() + report.entries.len() * 1024);
        html.push_str(HEAD);
        html.push_str(&format!(
            concat!(
                "<body>\n",
                "    <h1>{}</h1>\n",
                "    <h2>Searched within: {}</h2>\n",
                "    <p>Keywords: {}</p>\n",
                "    <p>{} most recent papers in each category and keyword-based search</p>\n",
                "    <ol>\n"
            ),
            REPORT_TITLE,
            escape_html(&report.categories.join(", ")),
            escape_html(&report.keywords),
            max_results
        ));
        report.entries.iter()
            .enumerate()
            .for_each(|(idx, entry)| html.push_str(&Self::to_html_item(idx, entry)));
        html.push_str(TAIL);
        html
    }
}
