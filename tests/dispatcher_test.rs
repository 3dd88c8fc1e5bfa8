use anyhow::Result;
use applicant_ledger::core::dispatcher::{command_usages, parser_for, COMMAND_PARSERS};
use applicant_ledger::domain::command::{SortKey, SortOrder};
use applicant_ledger::domain::fields::ApplicationStatus;
use applicant_ledger::{dispatch, Command, ParseError, ParseErrorKind};

#[test]
fn test_unknown_keyword() {
    assert_eq!(
        dispatch("foo n/Alice"),
        Err(ParseError::UnknownCommand {
            keyword: "foo".to_string()
        })
    );
}

#[test]
fn test_unknown_keyword_message() {
    let err = dispatch("remove 1").unwrap_err();
    assert_eq!(err.to_string(), "Unknown command: remove");
    assert_eq!(err.kind(), ParseErrorKind::UnknownCommand);
}

#[test]
fn test_leading_whitespace_before_keyword() -> Result<()> {
    assert_eq!(dispatch("   list")?, Command::List);
    Ok(())
}

#[test]
fn test_every_keyword_routes_to_its_parser() -> Result<()> {
    let lines = [
        "add n/Alice p/98765432 e/alice@ex.com g/85 i/NUS c/CS y/2025-05",
        "edit 1 n/Bob",
        "delete 1",
        "find alice",
        "filter st/Hired",
        "sort name",
        "list",
        "clear",
        "help",
        "exit",
    ];
    for line in lines {
        let keyword = line.split_whitespace().next().unwrap_or_default();
        assert_eq!(dispatch(line)?.keyword(), keyword, "line {:?}", line);
        assert!(parser_for(keyword).is_some());
    }
    assert_eq!(lines.len(), COMMAND_PARSERS.len());
    Ok(())
}

#[test]
fn test_parser_failure_is_propagated_verbatim() {
    let direct = parser_for("delete").unwrap().parse(" abc").unwrap_err();
    let dispatched = dispatch("delete abc").unwrap_err();
    assert_eq!(direct, dispatched);
}

#[test]
fn test_edit_and_filter_through_dispatch() -> Result<()> {
    let Command::Edit { index, descriptor } = dispatch("edit 3 st/Rejected g/40")? else {
        anyhow::bail!("expected edit");
    };
    assert_eq!(index.one_based(), 3);
    assert_eq!(descriptor.status, Some(ApplicationStatus::Rejected));
    assert_eq!(descriptor.grade.map(|g| g.value()), Some(40));

    let Command::Filter { criteria } = dispatch("filter i/nus s/Rust")? else {
        anyhow::bail!("expected filter");
    };
    assert_eq!(criteria.institution.unwrap().as_str(), "nus");
    assert_eq!(criteria.skills.len(), 1);
    Ok(())
}

#[test]
fn test_sort_through_dispatch() -> Result<()> {
    assert_eq!(
        dispatch("sort graduation desc")?,
        Command::Sort {
            key: SortKey::Graduation,
            order: SortOrder::Descending
        }
    );
    Ok(())
}

#[test]
fn test_every_usage_starts_with_its_keyword() {
    for (parser, usage) in COMMAND_PARSERS.iter().zip(command_usages()) {
        assert!(
            usage.starts_with(&format!("{}:", parser.keyword())),
            "usage {:?}",
            usage
        );
    }
}

#[test]
fn test_failed_parse_is_repeatable() {
    let line = "add n/Alice";
    assert_eq!(dispatch(line), dispatch(line));
}
