//! Interactive menu loop.
//!
//! # Responsibility
//! - Present the action menu, collect input, and dispatch one service call per
//!   iteration.
//! - Turn every store failure into a printed message and return to the menu.
//!
//! # Invariants
//! - The loop owns the service; there is no global record state.
//! - Only `Exit` or an input failure leaves the loop.

use crate::prompt::{PromptError, Prompter};
use crate::table::render_employees;
use log::{debug, info};
use staffdesk_core::{
    DeleteOutcome, EmployeeRepository, EmployeeService, EmployeeUpdate, EmployeeValidationError,
    NewEmployee, RepoError,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

const WELCOME_BANNER: &str = "Welcome to Employee Management CLI";
const MENU_TITLE: &str = "Employee Management - Choose an action:";

pub type MenuResult<T> = Result<T, MenuError>;

#[derive(Debug)]
pub enum MenuError {
    Prompt(PromptError),
    Output(io::Error),
}

impl MenuError {
    /// Returns whether the user simply closed the input stream.
    pub fn is_session_end(&self) -> bool {
        matches!(self, Self::Prompt(PromptError::Closed))
    }
}

impl Display for MenuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prompt(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl Error for MenuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prompt(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<PromptError> for MenuError {
    fn from(value: PromptError) -> Self {
        Self::Prompt(value)
    }
}

impl From<io::Error> for MenuError {
    fn from(value: io::Error) -> Self {
        Self::Output(value)
    }
}

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    List,
    Search,
    Update,
    Delete,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        Self::Add,
        Self::List,
        Self::Search,
        Self::Update,
        Self::Delete,
        Self::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add employee",
            Self::List => "List employees",
            Self::Search => "Search employees",
            Self::Update => "Update employee",
            Self::Delete => "Delete employee",
            Self::Exit => "Exit",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::List => "list",
            Self::Search => "search",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Exit => "exit",
        }
    }

    /// Accepts a 1-based menu number, an action value, or a full label.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| Self::ALL.get(index))
                .copied();
        }
        Self::ALL.into_iter().find(|action| {
            action.value().eq_ignore_ascii_case(input) || action.label().eq_ignore_ascii_case(input)
        })
    }
}

/// Menu controller owning the employee service for the whole session.
pub struct MenuLoop<R: EmployeeRepository, P: Prompter, W: Write> {
    service: EmployeeService<R>,
    prompter: P,
    out: W,
}

impl<R: EmployeeRepository, P: Prompter, W: Write> MenuLoop<R, P, W> {
    pub fn new(service: EmployeeService<R>, prompter: P, out: W) -> Self {
        Self {
            service,
            prompter,
            out,
        }
    }

    /// Runs until `Exit` is chosen or input fails.
    pub fn run(&mut self) -> MenuResult<()> {
        writeln!(self.out, "{WELCOME_BANNER}")?;
        info!("event=session_start module=cli status=ok");

        loop {
            let action = self.choose_action()?;
            debug!(
                "event=menu_action module=cli status=ok action={}",
                action.value()
            );

            match action {
                MenuAction::Add => self.add_employee()?,
                MenuAction::List => self.list_employees()?,
                MenuAction::Search => self.search_employees()?,
                MenuAction::Update => self.update_employee()?,
                MenuAction::Delete => self.delete_employee()?,
                MenuAction::Exit => {
                    writeln!(self.out, "Goodbye!")?;
                    info!("event=session_end module=cli status=ok");
                    return Ok(());
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (EmployeeService<R>, P, W) {
        (self.service, self.prompter, self.out)
    }

    fn choose_action(&mut self) -> MenuResult<MenuAction> {
        writeln!(self.out, "? {MENU_TITLE}")?;
        for (number, action) in MenuAction::ALL.iter().enumerate() {
            writeln!(self.out, "  {}) {}", number + 1, action.label())?;
        }

        let choices = MenuAction::ALL.len();
        loop {
            let answer = self.prompter.ask(&format!("Choice [1-{choices}]:"))?;
            if let Some(action) = MenuAction::parse(&answer) {
                return Ok(action);
            }
            writeln!(
                self.out,
                ">> Please choose 1-{choices} or one of: add, list, search, update, delete, exit"
            )?;
        }
    }

    fn add_employee(&mut self) -> MenuResult<()> {
        let id = self.ask_required("Employee ID:", EmployeeValidationError::EmptyId)?;
        let name = self.ask_required("Full Name:", EmployeeValidationError::EmptyName)?;
        let role = self.prompter.ask("Role/Position:")?;
        let department = self.prompter.ask("Department:")?;

        let request = NewEmployee::new(id, name).role(role).department(department);
        match self.service.add_employee(request) {
            Ok(()) => writeln!(self.out, "Employee added successfully.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn list_employees(&mut self) -> MenuResult<()> {
        let rendered = render_employees(self.service.list_employees());
        writeln!(self.out, "{rendered}")?;
        Ok(())
    }

    fn search_employees(&mut self) -> MenuResult<()> {
        // Matched as typed: surrounding spaces are part of the term.
        let term = self
            .prompter
            .ask_raw("Search term (matches id, name, role, department):")?;
        let rendered = render_employees(self.service.search_employees(&term));
        writeln!(self.out, "{rendered}")?;
        Ok(())
    }

    fn update_employee(&mut self) -> MenuResult<()> {
        if self.service.is_empty() {
            writeln!(self.out, "No employees to update.")?;
            return Ok(());
        }

        let id = self.prompter.ask("Employee ID to update:")?;
        let Some(current) = self.service.get_employee(&id).cloned() else {
            return self.report(&RepoError::NotFound(id));
        };

        let update = EmployeeUpdate {
            name: Some(self.prompter.ask(&format!("Full Name ({}):", current.name))?),
            role: Some(self.prompter.ask(&format!("Role ({}):", current.role))?),
            department: Some(
                self.prompter
                    .ask(&format!("Department ({}):", current.department))?,
            ),
        };

        match self.service.update_employee(&id, &update) {
            Ok(_) => writeln!(self.out, "Employee updated successfully.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn delete_employee(&mut self) -> MenuResult<()> {
        if self.service.is_empty() {
            writeln!(self.out, "No employees to delete.")?;
            return Ok(());
        }

        let id = self.prompter.ask("Employee ID to delete:")?;
        let Some(name) = self.service.get_employee(&id).map(|e| e.name.clone()) else {
            return self.report(&RepoError::NotFound(id));
        };

        let confirmed = self.prompter.confirm(
            &format!("Are you sure you want to delete employee {name}?"),
            false,
        )?;
        match self.service.delete_employee(&id, confirmed) {
            Ok(DeleteOutcome::Deleted(_)) => {
                writeln!(self.out, "Employee deleted successfully.")?
            }
            Ok(DeleteOutcome::Cancelled) => writeln!(self.out, "Deletion cancelled.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    /// Re-asks until the answer is non-empty, printing `missing` after each blank.
    fn ask_required(
        &mut self,
        message: &str,
        missing: EmployeeValidationError,
    ) -> MenuResult<String> {
        loop {
            let answer = self.prompter.ask(message)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            writeln!(self.out, ">> {missing}")?;
        }
    }

    fn report(&mut self, err: &RepoError) -> MenuResult<()> {
        match err {
            RepoError::DuplicateId(_) => {
                writeln!(self.out, "Employee with this ID already exists.")?
            }
            RepoError::NotFound(_) => writeln!(self.out, "Employee not found.")?,
            RepoError::Validation(reason) => writeln!(self.out, "{reason}")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuAction, MenuLoop};
    use crate::prompt::testing::ScriptedPrompter;
    use crate::prompt::PromptError;
    use staffdesk_core::{EmployeeService, InMemoryEmployeeRepository, NewEmployee};

    type TestLoop = MenuLoop<InMemoryEmployeeRepository, ScriptedPrompter, Vec<u8>>;

    fn menu_with(service: EmployeeService<InMemoryEmployeeRepository>, answers: &[&str]) -> TestLoop {
        MenuLoop::new(service, ScriptedPrompter::new(answers.iter().copied()), Vec::new())
    }

    fn run_script(
        service: EmployeeService<InMemoryEmployeeRepository>,
        answers: &[&str],
    ) -> (EmployeeService<InMemoryEmployeeRepository>, ScriptedPrompter, String) {
        let mut menu = menu_with(service, answers);
        menu.run().expect("script should end with exit");
        let (service, prompter, out) = menu.into_parts();
        (service, prompter, String::from_utf8(out).unwrap())
    }

    fn seeded() -> EmployeeService<InMemoryEmployeeRepository> {
        let mut service = EmployeeService::new(InMemoryEmployeeRepository::new());
        service
            .add_employee(
                NewEmployee::new("1", "Ada Lovelace")
                    .role("Engineer")
                    .department("R&D"),
            )
            .unwrap();
        service
    }

    #[test]
    fn parse_accepts_numbers_values_and_labels() {
        assert_eq!(MenuAction::parse("1"), Some(MenuAction::Add));
        assert_eq!(MenuAction::parse("6"), Some(MenuAction::Exit));
        assert_eq!(MenuAction::parse(" Search "), Some(MenuAction::Search));
        assert_eq!(MenuAction::parse("delete employee"), Some(MenuAction::Delete));
        assert_eq!(MenuAction::parse("0"), None);
        assert_eq!(MenuAction::parse("7"), None);
        assert_eq!(MenuAction::parse("quit"), None);
    }

    #[test]
    fn menu_shows_banner_labels_and_goodbye() {
        let (_, _, out) = run_script(EmployeeService::default(), &["exit"]);

        assert!(out.starts_with("Welcome to Employee Management CLI\n"));
        for label in [
            "1) Add employee",
            "2) List employees",
            "3) Search employees",
            "4) Update employee",
            "5) Delete employee",
            "6) Exit",
        ] {
            assert!(out.contains(label), "missing `{label}` in:\n{out}");
        }
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn full_session_walks_every_action() {
        #[rustfmt::skip]
        let script = [
            "add", "1", "Ada Lovelace", "Engineer", "R&D",
            "list",
            "add", "1", "Someone Else", "", "",
            "update", "1", "", "Lead", "",
            "search", "ENGIN",
            "search", "lead",
            "delete", "1", "",
            "delete", "1", "y",
            "list",
            "exit",
        ];
        let (service, _, out) = run_script(EmployeeService::default(), &script);

        assert!(out.contains("Employee added successfully."));
        assert!(out.contains("| 0       | 1  | Ada Lovelace | Engineer | R&D        |"));
        assert!(out.contains("Employee with this ID already exists."));
        assert!(out.contains("Employee updated successfully."));
        assert!(out.contains("| 0       | 1  | Ada Lovelace | Lead | R&D        |"));
        assert!(out.contains("Deletion cancelled."));
        assert!(out.contains("Employee deleted successfully."));
        assert!(out.contains("No employees found."));
        assert!(service.is_empty());
    }

    #[test]
    fn add_reprompts_for_missing_required_fields() {
        let script = ["1", "", "7", "", "Grace Hopper", "", "", "6"];
        let (service, prompter, out) = run_script(EmployeeService::default(), &script);

        assert_eq!(out.matches(">> ID is required").count(), 1);
        assert_eq!(out.matches(">> Name is required").count(), 1);
        assert_eq!(service.get_employee("7").unwrap().name, "Grace Hopper");
        assert!(prompter.prompts.contains(&"? Role/Position: ".to_string()));
    }

    #[test]
    fn update_on_empty_store_skips_id_prompt() {
        let (_, prompter, out) = run_script(EmployeeService::default(), &["update", "exit"]);

        assert!(out.contains("No employees to update."));
        assert!(!prompter
            .prompts
            .iter()
            .any(|prompt| prompt.contains("Employee ID to update")));
    }

    #[test]
    fn delete_on_empty_store_skips_id_prompt() {
        let (_, prompter, out) = run_script(EmployeeService::default(), &["delete", "exit"]);

        assert!(out.contains("No employees to delete."));
        assert!(!prompter
            .prompts
            .iter()
            .any(|prompt| prompt.contains("Employee ID to delete")));
    }

    #[test]
    fn search_term_is_matched_without_trimming() {
        let script = ["search", " Lovelace", "search", "Lovelace ", "exit"];
        let (_, _, out) = run_script(seeded(), &script);

        assert_eq!(out.matches("| 0       | 1  | Ada Lovelace |").count(), 1);
        assert_eq!(out.matches("No employees found.").count(), 1);
    }

    #[test]
    fn whitespace_search_term_is_not_match_all() {
        let (_, _, out) = run_script(seeded(), &["search", "  ", "exit"]);

        assert!(out.contains("No employees found."));
    }

    #[test]
    fn required_prompt_output_failure_is_reported() {
        let mut menu = MenuLoop::new(
            EmployeeService::<InMemoryEmployeeRepository>::default(),
            ScriptedPrompter::new(["add", "", "1"]),
            RejectHints,
        );

        let err = menu.run().unwrap_err();
        assert!(!err.is_session_end());
        assert!(matches!(err, super::MenuError::Output(_)));
    }

    /// Writer that fails on `>>` hint lines and swallows everything else.
    struct RejectHints;

    impl std::io::Write for RejectHints {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if buf.starts_with(b">>") {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "closed",
                ));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn update_unknown_id_returns_to_menu_without_field_prompts() {
        let (service, prompter, out) = run_script(seeded(), &["update", "404", "exit"]);

        assert!(out.contains("Employee not found."));
        assert!(!prompter
            .prompts
            .iter()
            .any(|prompt| prompt.starts_with("? Full Name (")));
        assert_eq!(service.get_employee("1").unwrap().name, "Ada Lovelace");
    }

    #[test]
    fn update_prompts_show_current_values() {
        let (_, prompter, _) = run_script(seeded(), &["update", "1", "", "", "", "exit"]);

        assert!(prompter.prompts.contains(&"? Full Name (Ada Lovelace): ".to_string()));
        assert!(prompter.prompts.contains(&"? Role (Engineer): ".to_string()));
        assert!(prompter.prompts.contains(&"? Department (R&D): ".to_string()));
    }

    #[test]
    fn delete_asks_for_confirmation_by_name() {
        let (service, prompter, out) = run_script(seeded(), &["delete", "1", "no", "exit"]);

        assert!(prompter.prompts.contains(
            &"? Are you sure you want to delete employee Ada Lovelace? (y/N) ".to_string()
        ));
        assert!(out.contains("Deletion cancelled."));
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn delete_unknown_id_reports_not_found() {
        let (service, _, out) = run_script(seeded(), &["delete", "2", "exit"]);

        assert!(out.contains("Employee not found."));
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn invalid_choice_reprompts() {
        let (_, prompter, out) = run_script(EmployeeService::default(), &["9", "list", "exit"]);

        assert!(out.contains(">> Please choose 1-6"));
        assert!(out.contains("No employees found."));
        assert_eq!(
            prompter
                .prompts
                .iter()
                .filter(|prompt| prompt.as_str() == "? Choice [1-6]: ")
                .count(),
            3
        );
    }

    #[test]
    fn closed_input_ends_session() {
        let mut menu = menu_with(EmployeeService::default(), &["add", "1"]);

        let err = menu.run().unwrap_err();
        assert!(err.is_session_end());
        assert!(matches!(err, super::MenuError::Prompt(PromptError::Closed)));
    }
}
