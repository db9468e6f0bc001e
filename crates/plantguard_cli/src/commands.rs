//! Command execution against the in-process demo catalog.
//!
//! Every invocation starts from a freshly seeded catalog; review commands
//! mutate that copy and print the resulting record.

use crate::cli::{Command, ListArgs, ReviewArgs, TargetArgs};
use crate::error::CliError;
use plantguard_core::{
    demo_catalog, filter_diseases, filter_pests, filter_remedies, related_items, summarize,
    DashboardSummary, DiseaseFilter, PestFilter, RecordId, RecordKind, RecordRef,
    RecordRepository, RecordStore, RelatedItem, RemedyFilter, ReviewService, UserDirectory,
};
use serde::Serialize;
use uuid::Uuid;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

pub fn execute(command: Command, format: Format) -> Result<String, CliError> {
    let mut store = demo_catalog();
    let directory = UserDirectory::demo();

    match command {
        Command::List(args) => list(&store, &args, format),
        Command::Show(target) => {
            let record = find_record(&store, &target)?;
            match format {
                Format::Json => to_json(&record),
                Format::Text => Ok(describe_record(&record)),
            }
        }
        Command::Related(target) => {
            let record = find_record(&store, &target)?;
            let items = related_items(&store, record.kind(), record.id());
            match format {
                Format::Json => to_json(&items),
                Format::Text => Ok(describe_related(record.name(), &items)),
            }
        }
        Command::Approve(args) => review(&mut store, &directory, &args, Decision::Approve, format),
        Command::Reject(args) => review(&mut store, &directory, &args, Decision::Reject, format),
        Command::Summary { recent } => {
            let summary = summarize(&store, recent);
            match format {
                Format::Json => to_json(&summary),
                Format::Text => Ok(describe_summary(&summary)),
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Decision {
    Approve,
    Reject,
}

fn list(store: &RecordStore, args: &ListArgs, format: Format) -> Result<String, CliError> {
    let records: Vec<RecordRef<'_>> = match args.kind {
        RecordKind::Disease => {
            let filter = DiseaseFilter {
                text: args.text.clone(),
                severity: args.severity,
                status: args.status,
            };
            filter_diseases(store, &filter)
                .into_iter()
                .map(RecordRef::Disease)
                .collect()
        }
        RecordKind::Pest => {
            let filter = PestFilter {
                text: args.text.clone(),
                severity: args.severity,
                status: args.status,
                season: args.season.clone(),
            };
            filter_pests(store, &filter)
                .into_iter()
                .map(RecordRef::Pest)
                .collect()
        }
        RecordKind::Remedy => {
            let filter = RemedyFilter {
                text: args.text.clone(),
                category: args.category,
                effectiveness: args.effectiveness,
                status: args.status,
            };
            filter_remedies(store, &filter)
                .into_iter()
                .map(RecordRef::Remedy)
                .collect()
        }
    };

    match format {
        Format::Json => to_json(&records),
        Format::Text if records.is_empty() => Ok(format!("No {} match the filters.", args.kind)),
        Format::Text => Ok(records
            .iter()
            .map(summary_line)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn review(
    store: &mut RecordStore,
    directory: &UserDirectory,
    args: &ReviewArgs,
    decision: Decision,
    format: Format,
) -> Result<String, CliError> {
    let actor = directory
        .find_by_email(&args.actor)
        .ok_or_else(|| CliError::UnknownUser(args.actor.clone()))?;
    let kind = args.target.kind;
    let id = find_record(store, &args.target)?.id();

    let mut service = ReviewService::new(&mut *store);
    match decision {
        Decision::Approve => service.approve(actor, kind, id)?,
        Decision::Reject => service.reject(actor, kind, id)?,
    }

    let record = store
        .get(kind, id)
        .ok_or_else(|| CliError::RecordNotFound {
            kind,
            target: id.to_string(),
        })?;
    match format {
        Format::Json => to_json(&record),
        Format::Text => Ok(format!(
            "{} {} `{}` as {} ({})",
            record.status(),
            kind,
            record.name(),
            actor.name,
            actor.role.label()
        )),
    }
}

/// Resolves a record by id, falling back to a case-insensitive name match.
fn find_record<'a>(store: &'a RecordStore, target: &TargetArgs) -> Result<RecordRef<'a>, CliError> {
    let wanted = target.target.trim();
    let by_id = Uuid::parse_str(wanted)
        .ok()
        .and_then(|id: RecordId| store.get(target.kind, id));
    if let Some(record) = by_id {
        return Ok(record);
    }

    store
        .records()
        .into_iter()
        .find(|record| record.kind() == target.kind && record.name().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CliError::RecordNotFound {
            kind: target.kind,
            target: wanted.to_string(),
        })
}

fn summary_line(record: &RecordRef<'_>) -> String {
    let grade = match record {
        RecordRef::Disease(disease) => format!("{}/{}", disease.severity, disease.caused_by),
        RecordRef::Pest(pest) => pest.severity.to_string(),
        RecordRef::Remedy(remedy) => format!("{}/{}", remedy.effectiveness, remedy.category),
    };
    format!(
        "{}  {:<36}  {:<18}  {}",
        record.id(),
        record.name(),
        grade,
        record.status()
    )
}

fn describe_record(record: &RecordRef<'_>) -> String {
    let review = record.review();
    let mut lines = vec![
        format!("{} ({})", record.name(), record.kind()),
        format!("id:          {}", record.id()),
        format!("status:      {}", review.status),
        format!(
            "reported:    {} by user {}",
            review.reported_at.format("%Y-%m-%d %H:%M"),
            review.reported_by
        ),
    ];
    if let (Some(by), Some(at)) = (&review.approved_by, review.approved_at) {
        lines.push(format!(
            "approved:    {} by user {}",
            at.format("%Y-%m-%d %H:%M"),
            by
        ));
    }
    lines.push(format!(
        "relations:   {} explicit",
        record.explicit_relations().len()
    ));
    lines.join("\n")
}

fn describe_related(name: &str, items: &[RelatedItem]) -> String {
    if items.is_empty() {
        return format!("No related items found for `{name}`.");
    }

    let mut lines = vec![format!("Related to `{name}`:")];
    for item in items {
        let badges: Vec<String> = [
            item.severity.map(|value| value.to_string()),
            item.effectiveness.map(|value| value.to_string()),
            item.category.map(|value| value.to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();
        lines.push(format!(
            "- [{}] {} ({})",
            item.kind,
            item.name,
            badges.join(", ")
        ));
    }
    lines.join("\n")
}

fn describe_summary(summary: &DashboardSummary) -> String {
    let mut lines = vec![
        format!("diseases:          {}", summary.total_diseases),
        format!("pests:             {}", summary.total_pests),
        format!("remedies:          {}", summary.total_remedies),
        format!("pending approvals: {}", summary.pending_approvals),
        format!("critical issues:   {}", summary.critical_issues),
        "recent reports:".to_string(),
    ];
    for report in &summary.recent_reports {
        lines.push(format!(
            "  {}  {:<7} {} ({})",
            report.reported_at.format("%Y-%m-%d"),
            report.kind,
            report.name,
            report.status
        ));
    }
    lines.join("\n")
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
