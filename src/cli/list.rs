//! The `list` command

use anyhow::{Context, Result};
use clap::Args;

use super::output::Output;
use crate::domain::{sort_by_publication_date, Rfc, SelectOptions};
use crate::storage::Session;

pub const DEFAULT_TEMPLATE: &str = "{id} {title}";

/// Selection flags; when several are given the first in this order wins
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Hide RFCs that have been obsoleted
    #[arg(long)]
    exclude_obsolete: bool,

    /// RFCs obsoleted by RFC N
    #[arg(long, value_name = "N")]
    obsoleted_by: Option<u32>,

    /// RFCs that obsolete RFC N
    #[arg(long, value_name = "N")]
    obsolete: Option<u32>,

    /// RFCs updated by RFC N
    #[arg(long, value_name = "N")]
    updated_by: Option<u32>,

    /// RFCs that update RFC N
    #[arg(long, value_name = "N")]
    update: Option<u32>,

    /// Members of STD N
    #[arg(long, value_name = "N")]
    std: Option<u32>,

    /// Members of BCP N
    #[arg(long, value_name = "N")]
    bcp: Option<u32>,

    /// Members of FYI N
    #[arg(long, value_name = "N")]
    fyi: Option<u32>,

    /// RFCs with this status (e.g. proposed-standard, informational)
    #[arg(long)]
    category: Option<String>,

    /// RFCs from this stream (ietf, iab, irtf, independent, legacy)
    #[arg(long)]
    stream: Option<String>,

    /// Order by publication date instead of index order
    #[arg(long)]
    sort_by_date: bool,

    /// Line template; placeholders: {number} {id} {title} {date}
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    template: String,
}

impl ListArgs {
    fn options(&self) -> SelectOptions {
        SelectOptions {
            exclude_obsolete: self.exclude_obsolete,
            obsoleted_by: self.obsoleted_by,
            obsolete: self.obsolete,
            updated_by: self.updated_by,
            update: self.update,
            std: self.std,
            bcp: self.bcp,
            fyi: self.fyi,
            category: self.category.clone(),
            stream: self.stream.clone(),
        }
    }
}

pub fn run(args: ListArgs, session: &Session, output: &Output) -> Result<()> {
    let mut rfcs = session
        .list(&args.options())
        .context("Failed to list RFCs")?;

    if args.sort_by_date {
        sort_by_publication_date(&mut rfcs);
    }
    tracing::info!(count = rfcs.len(), "listing RFCs");

    if output.is_json() {
        output.data(&rfcs)?;
    } else {
        output.lines(rfcs.iter().map(|rfc| render(&args.template, rfc)))?;
    }

    Ok(())
}

/// Fills the placeholders of `template` from `rfc`
///
/// Unknown placeholders are left as written.
pub fn render(template: &str, rfc: &Rfc) -> String {
    let mut rendered = String::with_capacity(template.len() + rfc.title.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let tail = &rest[start..];

        let Some(end) = tail.find('}') else {
            rest = tail;
            break;
        };
        match &tail[1..end] {
            "number" => rendered.push_str(&rfc.number.to_string()),
            "id" => rendered.push_str(&rfc.document_id),
            "title" => rendered.push_str(&rfc.title),
            "date" => rendered.push_str(&rfc.publication_date.to_string()),
            _ => rendered.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }

    rendered.push_str(rest);
    rendered
}
