use crate::config::OutputFormat;
use crate::core::dispatcher::command_usages;
use crate::domain::command::{Command, EditApplicantDescriptor, FilterCriteria, SortOrder};
use crate::domain::fields::Skill;
use crate::domain::ports::{CommandExecutor, CommandResult};
use crate::utils::error::Result;

/// Executor that describes each command instead of applying it.
///
/// It stands in for the record store, which lives outside this crate, so the
/// interpreter can be driven end to end on its own.
#[derive(Debug, Clone)]
pub struct EchoExecutor {
    format: OutputFormat,
}

impl EchoExecutor {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl CommandExecutor for EchoExecutor {
    fn execute(&mut self, command: Command) -> Result<CommandResult> {
        match (&command, self.format) {
            (Command::Help, _) => Ok(CommandResult::new(command_usages().join("\n\n"))),
            (Command::Exit, _) => Ok(CommandResult::exiting("Goodbye!")),
            (_, OutputFormat::Json) => Ok(CommandResult::new(serde_json::to_string(&command)?)),
            (_, OutputFormat::Text) => Ok(CommandResult::new(describe(&command))),
        }
    }
}

fn describe(command: &Command) -> String {
    match command {
        Command::Add { applicant } => format!("New applicant: {}", applicant),
        Command::Edit { index, descriptor } => {
            format!("Edit applicant {}: {}", index, describe_edit(descriptor))
        }
        Command::Delete { index } => format!("Delete applicant {}", index),
        Command::Find { keywords } => format!(
            "Find applicants whose name contains any of: {}",
            keywords.keywords().join(", ")
        ),
        Command::Filter { criteria } => {
            format!("Filter applicants by {}", describe_filter(criteria))
        }
        Command::Sort { key, order } => {
            let direction = match order {
                SortOrder::Ascending => "ascending",
                SortOrder::Descending => "descending",
            };
            format!("Sort applicants by {} ({})", key.as_str(), direction)
        }
        Command::List => "List all applicants".to_string(),
        Command::Clear => "Clear all applicants".to_string(),
        Command::Help => command_usages().join("\n\n"),
        Command::Exit => "Goodbye!".to_string(),
    }
}

fn describe_edit(descriptor: &EditApplicantDescriptor) -> String {
    let mut changes = Vec::new();
    if let Some(name) = &descriptor.name {
        changes.push(format!("name={}", name));
    }
    if let Some(phone) = &descriptor.phone {
        changes.push(format!("phone={}", phone));
    }
    if let Some(email) = &descriptor.email {
        changes.push(format!("email={}", email));
    }
    if let Some(grade) = descriptor.grade {
        changes.push(format!("grade={}", grade));
    }
    if let Some(institution) = &descriptor.institution {
        changes.push(format!("institution={}", institution));
    }
    if let Some(course) = &descriptor.course {
        changes.push(format!("course={}", course));
    }
    if let Some(graduation) = descriptor.graduation_year_month {
        changes.push(format!("graduation={}", graduation));
    }
    if let Some(status) = descriptor.status {
        changes.push(format!("status={}", status));
    }
    if let Some(skills) = &descriptor.skills {
        changes.push(format!("skills={}", join_skills(skills.iter())));
    }
    changes.join(", ")
}

fn describe_filter(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();
    if let Some(status) = criteria.status {
        parts.push(format!("status={}", status));
    }
    if let Some(course) = &criteria.course {
        parts.push(format!("course={}", course));
    }
    if let Some(institution) = &criteria.institution {
        parts.push(format!("institution={}", institution));
    }
    if !criteria.skills.is_empty() {
        parts.push(format!("skills={}", join_skills(criteria.skills.iter())));
    }
    parts.join(", ")
}

fn join_skills<'a>(skills: impl Iterator<Item = &'a Skill>) -> String {
    let joined: Vec<&str> = skills.map(|s| s.as_str()).collect();
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dispatch;

    fn run(format: OutputFormat, line: &str) -> CommandResult {
        EchoExecutor::new(format)
            .execute(dispatch(line).unwrap())
            .unwrap()
    }

    #[test]
    fn test_text_description_of_add() {
        let result = run(
            OutputFormat::Text,
            "add n/Alice p/98765432 e/alice@ex.com g/85 i/NUS c/CS y/2025-05",
        );
        assert!(result.feedback.starts_with("New applicant: Alice;"));
        assert!(result.feedback.contains("Status: Applied"));
        assert!(!result.exit);
    }

    #[test]
    fn test_edit_clearing_skills() {
        let result = run(OutputFormat::Text, "edit 2 g/90 s/");
        assert_eq!(result.feedback, "Edit applicant 2: grade=90, skills=(none)");
    }

    #[test]
    fn test_json_output() {
        let result = run(OutputFormat::Json, "sort grade desc");
        let value: serde_json::Value = serde_json::from_str(&result.feedback).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"command": "sort", "key": "grade", "order": "descending"})
        );
    }

    #[test]
    fn test_help_lists_every_usage_in_both_formats() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let result = run(format, "help");
            assert!(result.feedback.contains("add: Adds an applicant."));
            assert!(result.feedback.contains("exit: Ends the session."));
        }
    }

    #[test]
    fn test_exit_ends_session() {
        assert!(run(OutputFormat::Json, "exit").exit);
    }

    #[test]
    fn test_filter_description() {
        let result = run(OutputFormat::Text, "filter st/hired s/Rust s/Go");
        assert_eq!(
            result.feedback,
            "Filter applicants by status=Hired, skills=Go Rust"
        );
    }
}
