//! Interactive menu over a [`Timetable`].
//!
//! A thin loop: every action maps onto one public timetable operation.
//! Raw answers are parsed here, so malformed input never reaches the core.
//! The session is generic over its reader and writer so it can be driven
//! from a terminal or from a script.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::error::{parse_number, required, Result, TimetableError};
use crate::models::{DayOfWeek, SchoolClass, Subject, Teacher, TimetableEntry};
use crate::sample::load_sample_data;
use crate::Timetable;

const BANNER_WIDTH: usize = 70;

/// An interactive editing session.
pub struct Session<R, W> {
    timetable: Timetable,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session editing `timetable`.
    pub fn new(timetable: Timetable, input: R, output: W) -> Self {
        Self {
            timetable,
            input,
            output,
        }
    }

    /// Ends the session, returning the edited timetable.
    pub fn into_timetable(self) -> Timetable {
        self.timetable
    }

    /// Runs the main menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        let banner = "=".repeat(BANNER_WIDTH);
        writeln!(self.output, "{banner}\nSchool Timetable Builder\n{banner}")?;

        match self.main_menu() {
            Err(TimetableError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("input closed, ending session");
                writeln!(self.output, "\nExiting... Goodbye!")?;
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            writeln!(
                self.output,
                "\nMain Menu:\n\
                 1. Manage Subjects\n\
                 2. Manage Teachers\n\
                 3. Manage Classes\n\
                 4. Build Timetable\n\
                 5. View Timetables\n\
                 6. Edit Timetable\n\
                 7. Validate Timetable\n\
                 8. Load Sample Data\n\
                 9. Exit"
            )?;
            let choice = self.ask("\nEnter your choice (1-9): ")?;
            debug!(choice = %choice, "main menu");

            let outcome = match choice.as_str() {
                "1" => self.manage_subjects(),
                "2" => self.manage_teachers(),
                "3" => self.manage_classes(),
                "4" => self.build_entry(),
                "5" => self.view_timetables(),
                "6" => self.edit_timetable(),
                "7" => self.validate_timetable(),
                "8" => self.load_sample(),
                "9" => {
                    writeln!(self.output, "\nExiting... Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "\nInvalid choice. Please try again.")?;
                    Ok(())
                }
            };
            self.report(outcome)?;
        }
    }

    // ---- registries -------------------------------------------------------

    fn manage_subjects(&mut self) -> Result<()> {
        loop {
            writeln!(
                self.output,
                "\n--- Manage Subjects ---\n1. Add Subject\n2. List Subjects\n3. Back to Main Menu"
            )?;
            match self.ask("\nEnter your choice (1-3): ")?.as_str() {
                "1" => {
                    let outcome = self.add_subject();
                    self.report(outcome)?;
                }
                "2" => {
                    let lines = listing(self.timetable.subjects(), "subjects");
                    writeln!(self.output, "{lines}")?;
                }
                "3" => return Ok(()),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn manage_teachers(&mut self) -> Result<()> {
        loop {
            writeln!(
                self.output,
                "\n--- Manage Teachers ---\n1. Add Teacher\n2. List Teachers\n3. Back to Main Menu"
            )?;
            match self.ask("\nEnter your choice (1-3): ")?.as_str() {
                "1" => {
                    let outcome = self.add_teacher();
                    self.report(outcome)?;
                }
                "2" => {
                    let lines = listing(self.timetable.teachers(), "teachers");
                    writeln!(self.output, "{lines}")?;
                }
                "3" => return Ok(()),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn manage_classes(&mut self) -> Result<()> {
        loop {
            writeln!(
                self.output,
                "\n--- Manage Classes ---\n1. Add Class\n2. List Classes\n3. Back to Main Menu"
            )?;
            match self.ask("\nEnter your choice (1-3): ")?.as_str() {
                "1" => {
                    let outcome = self.add_class();
                    self.report(outcome)?;
                }
                "2" => {
                    let lines = listing(self.timetable.classes(), "classes");
                    writeln!(self.output, "{lines}")?;
                }
                "3" => return Ok(()),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn add_subject(&mut self) -> Result<()> {
        let code = self.ask("Enter subject code: ")?;
        let name = self.ask("Enter subject name: ")?;
        let code = required("subject code", code)?;
        let name = required("subject name", name)?;

        info!(code = %code, "subject added");
        writeln!(self.output, "Subject '{name}' added successfully!")?;
        self.timetable.add_subject(Subject::new(code, name));
        Ok(())
    }

    fn add_teacher(&mut self) -> Result<()> {
        let id = self.ask("Enter teacher ID: ")?;
        let name = self.ask("Enter teacher name: ")?;
        let id = required("teacher ID", id)?;
        let name = required("teacher name", name)?;

        let codes = self.ask("Enter subject codes (comma-separated, optional): ")?;
        let teacher = Teacher::new(id, name).with_subjects(
            codes
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty()),
        );
        info!(id = %teacher.id, subjects = teacher.subjects.len(), "teacher added");
        writeln!(self.output, "Teacher '{}' added successfully!", teacher.name)?;
        self.timetable.add_teacher(teacher);
        Ok(())
    }

    fn add_class(&mut self) -> Result<()> {
        let id = self.ask("Enter class ID: ")?;
        let name = self.ask("Enter class name: ")?;
        let id = required("class ID", id)?;
        let name = required("class name", name)?;

        let raw = self.ask("Enter number of students: ")?;
        let students = if raw.is_empty() {
            0
        } else {
            parse_number::<u32>("number of students", &raw)?
        };
        info!(id = %id, students, "class added");
        writeln!(self.output, "Class '{name}' added successfully!")?;
        self.timetable
            .add_class(SchoolClass::new(id, name).with_students(students));
        Ok(())
    }

    // ---- entries ----------------------------------------------------------

    fn build_entry(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Build Timetable Entry ---")?;

        let tt = &self.timetable;
        let missing = if tt.classes().is_empty() {
            Some("classes")
        } else if tt.subjects().is_empty() {
            Some("subjects")
        } else if tt.teachers().is_empty() {
            Some("teachers")
        } else {
            None
        };
        if let Some(what) = missing {
            writeln!(self.output, "No {what} available. Please add {what} first.")?;
            return Ok(());
        }

        let mut menu = String::from("\nAvailable Classes:");
        for c in tt.classes() {
            menu.push_str(&format!("\n  {}: {}", c.id, c.name));
        }
        menu.push_str("\n\nAvailable Days:");
        for day in DayOfWeek::ALL {
            menu.push_str(&format!("\n  {}: {}", day.ordinal(), day));
        }
        menu.push_str("\n\nAvailable Periods:");
        for slot in tt.time_slots() {
            menu.push_str(&format!("\n  {}: {}-{}", slot.period, slot.start_time, slot.end_time));
        }
        menu.push_str("\n\nAvailable Subjects:");
        for s in tt.subjects() {
            menu.push_str(&format!("\n  {}: {}", s.code, s.name));
        }
        menu.push_str("\n\nAvailable Teachers:");
        for t in tt.teachers() {
            menu.push_str(&format!("\n  {}: {}", t.id, t.name));
        }
        writeln!(self.output, "{menu}")?;

        let class_id = self.ask("\nEnter class ID: ")?;
        if !self.timetable.classes().contains(&class_id) {
            writeln!(self.output, "Invalid class ID.")?;
            return Ok(());
        }
        let day = DayOfWeek::from_ordinal(parse_number("day", &self.ask("Enter day (0-4): ")?)?)?;

        let prompt = period_prompt(&self.timetable);
        let period: u32 = parse_number("period", &self.ask(&prompt)?)?;
        let time_slot = self
            .timetable
            .time_slot(period)
            .cloned()
            .ok_or(TimetableError::UnknownPeriod(period))?;

        let subject_code = self.ask("Enter subject code: ")?;
        if !self.timetable.subjects().contains(&subject_code) {
            writeln!(self.output, "Invalid subject code.")?;
            return Ok(());
        }
        let teacher_id = self.ask("Enter teacher ID: ")?;
        if !self.timetable.teachers().contains(&teacher_id) {
            writeln!(self.output, "Invalid teacher ID.")?;
            return Ok(());
        }
        if self
            .timetable
            .teacher(&teacher_id)
            .is_some_and(|t| !t.teaches(&subject_code))
        {
            warn!(
                teacher_id = %teacher_id,
                subject_code = %subject_code,
                "teacher does not list this subject"
            );
        }
        let room = self.ask("Enter room (optional): ")?;

        let mut entry = TimetableEntry::new(day, time_slot, class_id, subject_code, teacher_id);
        if !room.is_empty() {
            entry = entry.with_room(room);
        }
        let summary = entry.to_string();

        if self.timetable.add_entry(entry) {
            info!(entry = %summary, "entry added");
            writeln!(self.output, "\nTimetable entry added successfully!")?;
        } else {
            warn!(entry = %summary, "entry rejected: conflict");
            writeln!(
                self.output,
                "\nCannot add entry: Conflict detected!\n\
                 Either the teacher or the class is already scheduled at this time."
            )?;
        }
        Ok(())
    }

    fn edit_timetable(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Edit Timetable ---")?;
        if self.timetable.entries().is_empty() {
            writeln!(self.output, "No timetable entries to edit.")?;
            return Ok(());
        }

        let mut listing = String::from("\nCurrent Entries:");
        for (i, entry) in self.timetable.entries().iter().enumerate() {
            listing.push_str(&format!("\n{}. {}", i + 1, entry));
        }
        writeln!(self.output, "{listing}\n\n1. Remove an entry\n2. Back to Main Menu")?;

        if self.ask("\nEnter your choice (1-2): ")? != "1" {
            return Ok(());
        }

        let class_id = self.ask("Enter class ID: ")?;
        let day = DayOfWeek::from_ordinal(parse_number("day", &self.ask("Enter day (0-4): ")?)?)?;
        let period: u32 = parse_number("period", &self.ask("Enter period: ")?)?;

        if self.timetable.remove_entry(day, period, &class_id) {
            info!(class_id = %class_id, %day, period, "entry removed");
            writeln!(self.output, "Entry removed successfully!")?;
        } else {
            writeln!(self.output, "Entry not found.")?;
        }
        Ok(())
    }

    // ---- views ------------------------------------------------------------

    fn view_timetables(&mut self) -> Result<()> {
        loop {
            writeln!(
                self.output,
                "\n--- View Timetables ---\n\
                 1. View Class Timetable\n\
                 2. View Teacher Timetable\n\
                 3. View All Entries\n\
                 4. Back to Main Menu"
            )?;
            match self.ask("\nEnter your choice (1-4): ")?.as_str() {
                "1" => {
                    let id = self.ask("Enter class ID: ")?;
                    let view = self.timetable.display_class_timetable(&id);
                    writeln!(self.output, "{view}")?;
                }
                "2" => {
                    let id = self.ask("Enter teacher ID: ")?;
                    let view = self.timetable.display_teacher_timetable(&id);
                    writeln!(self.output, "{view}")?;
                }
                "3" => {
                    let view = self.timetable.display_all_entries();
                    writeln!(self.output, "\n{view}")?;
                }
                "4" => return Ok(()),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn validate_timetable(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Validate Timetable ---")?;
        let errors = self.timetable.validate();

        if errors.is_empty() {
            info!("timetable valid");
            writeln!(self.output, "\nTimetable is valid! No conflicts found.")?;
        } else {
            warn!(count = errors.len(), "timetable has conflicts");
            writeln!(self.output, "\nValidation Errors Found:")?;
            for error in &errors {
                writeln!(self.output, "  - {error}")?;
            }
        }
        Ok(())
    }

    fn load_sample(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Loading Sample Data ---")?;
        let summary = load_sample_data(&mut self.timetable);
        info!(?summary, "sample data loaded");
        writeln!(
            self.output,
            "Sample data loaded successfully!\n  - {} subjects\n  - {} teachers\n  - {} classes\n  - {} timetable entries",
            summary.subjects, summary.teachers, summary.classes, summary.entries
        )?;
        Ok(())
    }

    // ---- io helpers -------------------------------------------------------

    /// Prompts and reads one trimmed line. End of input is an `UnexpectedEof`.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(line.trim().to_string())
    }

    /// Prints input errors and keeps the session alive; I/O errors propagate.
    fn report(&mut self, outcome: Result<()>) -> Result<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(e @ TimetableError::Io(_)) => Err(e),
            Err(e) => {
                debug!(error = %e, "rejected input");
                writeln!(self.output, "Invalid input: {e}")?;
                Ok(())
            }
        }
    }
}

/// Period prompt showing the configured range, e.g. `Enter period (1-7): `.
fn period_prompt(timetable: &Timetable) -> String {
    let periods = timetable.time_slots().iter().map(|s| s.period);
    match (periods.clone().min(), periods.max()) {
        (Some(lo), Some(hi)) => format!("Enter period ({lo}-{hi}): "),
        _ => "Enter period: ".to_string(),
    }
}

fn listing<'a, T: std::fmt::Display + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    what: &str,
) -> String {
    let lines: Vec<String> = items.into_iter().map(|i| format!("  - {i}")).collect();
    if lines.is_empty() {
        format!("\nNo {what} added yet.")
    } else {
        let mut title = what.to_string();
        if let Some(first) = title.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        format!("\n{title}:\n{}", lines.join("\n"))
    }
}

/// Loads the sample data and prints the Grade 9A and Mr. Smith views.
pub fn run_demo<W: Write>(timetable: &mut Timetable, out: &mut W) -> io::Result<()> {
    let summary = load_sample_data(timetable);
    info!(?summary, "demo data loaded");

    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "\n{rule}\nSample Timetable for Grade 9A:")?;
    writeln!(out, "{}", timetable.display_class_timetable("C1"))?;
    writeln!(out, "\n{rule}\nSample Timetable for Mr. Smith:")?;
    writeln!(out, "{}", timetable.display_teacher_timetable("T001"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchoolDayConfig;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Timetable, String) {
        crate::logging::init_test();
        let tt = SchoolDayConfig::default().build_timetable();
        let mut out = Vec::new();
        let mut session = Session::new(tt, Cursor::new(script.as_bytes()), &mut out);
        session.run().unwrap();
        let tt = session.into_timetable();
        (tt, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit() {
        let (_, out) = run_script("9\n");
        assert!(out.contains("School Timetable Builder"));
        assert!(out.ends_with("Exiting... Goodbye!\n"));
    }

    #[test]
    fn test_eof_ends_session() {
        let (_, out) = run_script("1\n");
        assert!(out.ends_with("Exiting... Goodbye!\n"));
    }

    #[test]
    fn test_add_and_list_subject() {
        let (tt, out) = run_script("1\n1\nMATH\nMathematics\n2\n3\n9\n");
        assert_eq!(tt.subject("MATH").map(|s| s.name.as_str()), Some("Mathematics"));
        assert!(out.contains("Subject 'Mathematics' added successfully!"));
        assert!(out.contains("Subjects:\n  - MATH - Mathematics"));
    }

    #[test]
    fn test_blank_subject_rejected() {
        let (tt, out) = run_script("1\n1\n\nMathematics\n1\nMATH\n\n3\n9\n");
        assert!(tt.subjects().is_empty());
        assert!(out.contains("Invalid input: subject code is required"));
        assert!(out.contains("Invalid input: subject name is required"));
        assert!(out.ends_with("Exiting... Goodbye!\n"));
    }

    #[test]
    fn test_add_teacher_with_subjects() {
        let (tt, _) = run_script("2\n1\nT001\nMr. Smith\nMATH, PHYS\n3\n9\n");
        let t = tt.teacher("T001").unwrap();
        assert_eq!(t.subjects, vec!["MATH", "PHYS"]);
    }

    #[test]
    fn test_add_class_default_and_bad_count() {
        let (tt, out) = run_script("3\n1\nC1\nGrade 9A\n\n1\nC2\nGrade 9B\nlots\n2\n3\n9\n");
        assert_eq!(tt.school_class("C1").map(|c| c.students_count), Some(0));
        assert!(tt.school_class("C2").is_none());
        assert!(out.contains("Invalid input: invalid number of students: 'lots'"));
        assert!(out.contains("Classes:\n  - Grade 9A (0 students)"));
    }

    #[test]
    fn test_build_requires_registries() {
        let (_, out) = run_script("4\n9\n");
        assert!(out.contains("No classes available. Please add classes first."));
    }

    #[test]
    fn test_build_entry_and_conflict() {
        let script = "8\n\
                      4\nC1\n1\n1\nMATH\nT001\nR101\n\
                      4\nC1\n1\n1\nMATH\nT001\n\n\
                      9\n";
        let (tt, out) = run_script(script);

        assert_eq!(tt.entry_count(), 8);
        assert!(out.contains("Timetable entry added successfully!"));
        assert!(out.contains("Cannot add entry: Conflict detected!"));
        let tuesday = tt.get_entries_for_day(DayOfWeek::Tuesday);
        assert_eq!(tuesday.len(), 1);
        assert_eq!(tuesday[0].room.as_deref(), Some("R101"));
    }

    #[test]
    fn test_build_entry_bad_day_and_period() {
        let script = "8\n4\nC1\n7\n4\nC1\n0\n12\n4\nC1\nx\n9\n";
        let (tt, out) = run_script(script);

        assert_eq!(tt.entry_count(), 7);
        assert!(out.contains("Invalid input: day must be between 0 (MONDAY) and 4 (FRIDAY), got 7"));
        assert!(out.contains("Invalid input: no time slot for period 12"));
        assert!(out.contains("Invalid input: invalid day: 'x'"));
    }

    #[test]
    fn test_build_entry_unknown_ids() {
        let (_, out) = run_script("8\n4\nC9\n9\n");
        assert!(out.contains("Invalid class ID."));
    }

    #[test]
    fn test_remove_entry() {
        let (tt, out) = run_script("8\n6\n1\nC1\n0\n1\n6\n1\nC1\n0\n1\n9\n");
        assert_eq!(tt.entry_count(), 6);
        assert!(out.contains("Entry removed successfully!"));
        assert!(out.contains("Entry not found."));
    }

    #[test]
    fn test_edit_empty() {
        let (_, out) = run_script("6\n9\n");
        assert!(out.contains("No timetable entries to edit."));
    }

    #[test]
    fn test_views() {
        let (_, out) = run_script("8\n5\n1\nC1\n2\nT999\n3\n4\n9\n");
        assert!(out.contains("Timetable for Grade 9A"));
        assert!(out.contains("Teacher T999 not found"));
        assert!(out.contains("All Timetable Entries:\n  - MONDAY 1: MATH - T001 in R101"));
    }

    #[test]
    fn test_validate_menu() {
        let (_, out) = run_script("7\n9\n");
        assert!(out.contains("Timetable is valid! No conflicts found."));
    }

    #[test]
    fn test_invalid_main_choice() {
        let (_, out) = run_script("42\n9\n");
        assert!(out.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_blank_teacher_and_class_ids_rejected() {
        let (tt, out) = run_script("2\n1\n\nMr. Smith\n3\n3\n1\n\nGrade 9A\n3\n9\n");
        assert!(tt.teachers().is_empty());
        assert!(tt.classes().is_empty());
        assert!(out.contains("Invalid input: teacher ID is required"));
        assert!(out.contains("Invalid input: class ID is required"));
    }

    #[test]
    fn test_period_prompt_shows_configured_range() {
        let (_, out) = run_script("8\n4\nC1\n1\n3\nMATH\nT001\n\n9\n");
        assert!(out.contains("Enter period (1-7): "));

        assert_eq!(period_prompt(&Timetable::new()), "Enter period: ");
    }

    #[test]
    fn test_sample_count_reports_offered_entries() {
        let cfg = SchoolDayConfig::from_json_str(
            r#"{"time_slots": [{"period": 1, "start_time": "08:00", "end_time": "08:50"}]}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        let mut session = Session::new(
            cfg.build_timetable(),
            Cursor::new("8\n9\n".as_bytes()),
            &mut out,
        );
        session.run().unwrap();
        let tt = session.into_timetable();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(tt.entry_count(), 3);
        assert!(out.contains("  - 7 timetable entries"));
    }

    #[test]
    fn test_run_demo() {
        let mut tt = SchoolDayConfig::default().build_timetable();
        let mut out = Vec::new();
        run_demo(&mut tt, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Sample Timetable for Grade 9A:\n\nTimetable for Grade 9A"));
        assert!(out.contains("Sample Timetable for Mr. Smith:\n\nTimetable for Mr. Smith"));
        assert!(out.contains("| Grade 9B             |"));
    }
}
