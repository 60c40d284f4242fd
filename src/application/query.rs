//! Formatting of remote records for `search` and `details`.

use crate::aur::RemoteRecord;

/// Whether every term occurs in the record's name or description (case-insensitive).
fn matches_terms(record: &RemoteRecord, terms: &[String]) -> bool {
    let name = record.name.to_lowercase();
    let description = record
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    terms.iter().all(|term| {
        let term = term.to_lowercase();
        name.contains(&term) || description.contains(&term)
    })
}

/// Search results, most popular first: a `maintainer/name version` line
/// followed by an indented description line.
pub fn search_lines(mut records: Vec<RemoteRecord>, terms: &[String]) -> Vec<String> {
    records.retain(|r| matches_terms(r, terms));
    records.sort_by(|a, b| {
        b.popularity
            .total_cmp(&a.popularity)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut lines = Vec::with_capacity(records.len() * 2);
    for record in records {
        lines.push(format!(
            "{}/{} {}",
            record.maintainer.as_deref().unwrap_or("orphan"),
            record.name,
            record.version
        ));
        if let Some(description) = record.description.filter(|d| !d.is_empty()) {
            lines.push(format!("    {}", description));
        }
    }
    lines
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

fn joined(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join("  "))
    }
}

/// The fields of a record that are present, in display order.
fn detail_fields(record: &RemoteRecord) -> Vec<(&'static str, String)> {
    let fields = [
        ("Name", Some(record.name.clone())),
        ("Version", Some(record.version.clone())),
        ("Description", non_empty(record.description.as_ref())),
        ("URL", non_empty(record.url.as_ref())),
        ("Licenses", joined(&record.licenses)),
        ("Depends", joined(&record.depends)),
        ("Make Deps", joined(&record.make_depends)),
        ("Optional Deps", joined(&record.opt_depends)),
        ("Maintainer", non_empty(record.maintainer.as_ref())),
        ("Votes", Some(record.num_votes.to_string())),
        ("Popularity", Some(record.popularity.to_string())),
    ];

    fields
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
}

/// `Label : value` lines for one record, labels padded to a common width.
pub fn detail_lines(record: &RemoteRecord) -> Vec<String> {
    let fields = detail_fields(record);
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    fields
        .into_iter()
        .map(|(label, value)| format!("{:<width$} : {}", label, value, width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, popularity: f64, maintainer: Option<&str>) -> RemoteRecord {
        RemoteRecord {
            name: name.into(),
            version: "1.0-1".into(),
            description: Some(format!("{} description", name)),
            popularity,
            maintainer: maintainer.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_sorted_by_popularity() {
        let records = vec![
            record("foo", 0.5, Some("alice")),
            record("foo-git", 3.0, None),
            record("foo-bin", 0.5, Some("bob")),
        ];

        let lines = search_lines(records, &["foo".to_string()]);
        assert_eq!(
            lines,
            vec![
                "orphan/foo-git 1.0-1",
                "    foo-git description",
                "alice/foo 1.0-1",
                "    foo description",
                "bob/foo-bin 1.0-1",
                "    foo-bin description",
            ]
        );
    }

    #[test]
    fn test_search_requires_every_term() {
        let mut vim = record("vim-plug", 1.0, Some("carol"));
        vim.description = Some("Minimalist Vim plugin manager".into());
        let other = record("vim-airline", 2.0, Some("dave"));

        let lines = search_lines(vec![vim, other], &["vim".to_string(), "PLUGIN".to_string()]);
        assert_eq!(
            lines,
            vec!["carol/vim-plug 1.0-1", "    Minimalist Vim plugin manager"]
        );
    }

    #[test]
    fn test_search_no_results() {
        assert!(search_lines(vec![], &["foo".to_string()]).is_empty());
    }

    #[test]
    fn test_search_omits_missing_description() {
        let mut r = record("foo", 1.0, Some("alice"));
        r.description = None;
        assert_eq!(
            search_lines(vec![r], &["foo".to_string()]),
            vec!["alice/foo 1.0-1"]
        );
    }

    #[test]
    fn test_details_only_present_fields() {
        let r = RemoteRecord {
            name: "foo".into(),
            version: "1.0-1".into(),
            description: Some("The foo tool".into()),
            licenses: vec!["MIT".into(), "Apache".into()],
            make_depends: vec!["cargo".into()],
            num_votes: 7,
            popularity: 0.25,
            ..Default::default()
        };

        assert_eq!(
            detail_lines(&r),
            vec![
                "Name        : foo",
                "Version     : 1.0-1",
                "Description : The foo tool",
                "Licenses    : MIT  Apache",
                "Make Deps   : cargo",
                "Votes       : 7",
                "Popularity  : 0.25",
            ]
        );
    }

    #[test]
    fn test_details_all_fields_order() {
        let r = RemoteRecord {
            name: "foo".into(),
            version: "1.0-1".into(),
            description: Some("d".into()),
            url: Some("https://foo.test".into()),
            licenses: vec!["MIT".into()],
            depends: vec!["glibc".into()],
            make_depends: vec!["cargo".into()],
            opt_depends: vec!["bash".into()],
            maintainer: Some("alice".into()),
            ..Default::default()
        };

        let labels: Vec<String> = detail_lines(&r)
            .iter()
            .map(|l| l.split(" : ").next().unwrap().trim_end().to_string())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Name",
                "Version",
                "Description",
                "URL",
                "Licenses",
                "Depends",
                "Make Deps",
                "Optional Deps",
                "Maintainer",
                "Votes",
                "Popularity",
            ]
        );
    }
}
