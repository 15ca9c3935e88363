//! Page builder — assembles full HTML dashboard documents and writes them
//! under `<output_root>/<channel>/<name>.html`.
//!
//! Rendering is pure string assembly over [`SafeString`] fragments; the only
//! side effect in this module is the local file write in [`PageBuilder::publish`].
//! Network I/O lives entirely in statusboard-sync.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use statusboard_core::{HtmlError, Page, PublishConfig, SafeString};

use crate::error::{io_err, RenderError};
use crate::templ::templ;

// ---------------------------------------------------------------------------
// Document fragments
// ---------------------------------------------------------------------------

const DOCUMENT_HEAD: &str = "\
<!DOCTYPE html>
<html>
<head>
<style>
table, th, td {{ border: 1px solid black; }}
body {{ background: #{background} }}
</style>
<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\" />
<meta http-equiv=\"refresh\" content=\"{refresh}\" />
<title>{title}</title>
</head>
<body>
";

const DOCUMENT_FOOT: &str = "</body></html>";

/// An anchor tag with both text and URL escaped.
pub fn html_link(text: &str, url: &str) -> Result<SafeString, HtmlError> {
    templ(
        "<a href=\"{url}\">{text}</a>",
        &[("url", url.into()), ("text", text.into())],
    )
}

// ---------------------------------------------------------------------------
// PageBuilder
// ---------------------------------------------------------------------------

/// Renders [`Page`]s into complete HTML documents and writes them to the
/// channel's output directory (created on demand).
pub struct PageBuilder {
    config: PublishConfig,
}

impl PageBuilder {
    pub fn new(config: PublishConfig) -> Self {
        PageBuilder { config }
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    /// Document head and opening body: charset + meta refresh + inline style
    /// coloring the background.
    pub fn open_document(
        &self,
        title: &str,
        background: &str,
    ) -> Result<SafeString, HtmlError> {
        templ(
            DOCUMENT_HEAD,
            &[
                ("background", background.into()),
                ("refresh", self.config.refresh_interval_secs().to_string().into()),
                ("title", title.into()),
            ],
        )
    }

    /// Closing body/html fragment.
    pub fn close_document(&self) -> SafeString {
        SafeString::trusted(DOCUMENT_FOOT)
    }

    /// Assemble the full document for `page` in memory. Pure; `now` is
    /// injected so tests can pin the generation timestamp.
    pub fn render_dashboard(
        &self,
        page: &Page,
        now: DateTime<Local>,
    ) -> Result<String, HtmlError> {
        let mut buf: Vec<SafeString> = vec![
            self.open_document(&page.title, &page.background)?,
            templ("<h1>{title}</h1>", &[("title", page.title.as_str().into())])?,
            SafeString::trusted("<br/>").join(page.description.split('\n')),
            SafeString::trusted("<br/><br/>"),
        ];

        if page.back_link {
            buf.push(html_link("Return to Index", "index.html")?);
            buf.push(SafeString::trusted("<br/><br/>"));
        }

        for table in &page.tables {
            // Empty tables are skipped entirely, not rendered as <table/>.
            let Some(header) = table.header() else {
                continue;
            };

            buf.push(SafeString::trusted("<table><thead><tr>"));
            for cell in header {
                buf.push(templ("<th>{hdr}</th>", &[("hdr", cell.clone())])?);
            }
            buf.push(SafeString::trusted("</tr></thead><tbody>"));

            for row in table.body() {
                buf.push(SafeString::trusted("<tr>"));
                for cell in row {
                    buf.push(templ("<td>{cell}</td>", &[("cell", cell.clone())])?);
                }
                buf.push(SafeString::trusted("</tr>"));
            }

            buf.push(SafeString::trusted("</tbody></table><br/><br/>"));
        }

        buf.push(templ(
            "<br/><small><i>Page generated at {time} {tz}</i></small>",
            &[
                ("time", now.format("%a %b %e %H:%M:%S %Y").to_string().into()),
                ("tz", now.format("%Z").to_string().into()),
            ],
        )?);
        buf.push(self.close_document());

        Ok(buf.iter().map(SafeString::as_str).collect())
    }

    /// Render `page` with the current local time and write it to
    /// `<output_root>/<channel>/<name>.html`.
    pub fn publish(&self, page: &Page) -> Result<PathBuf, RenderError> {
        let content = self.render_dashboard(page, Local::now())?;
        self.write_page(page.output_name(), &content)
    }

    fn write_page(&self, name: &str, content: &str) -> Result<PathBuf, RenderError> {
        let dir = self.config.channel_dir();
        fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;

        let path = self.config.page_path(name);
        fs::write(&path, content).map_err(|e| io_err(&path, e))?;
        tracing::debug!("wrote page: {}", path.display());
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
