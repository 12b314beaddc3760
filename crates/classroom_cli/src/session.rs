//! Menu-driven session over any line reader and writer.
//!
//! Every registry error is rendered and the loop continues; only I/O
//! failures end the session early. End of input exits cleanly.

use classroom_core::{ClassroomManager, EnrollOutcome};
use log::{error, info};
use std::io::{self, BufRead, Write};

const MENU: &str = "\n--- Main Menu ---
1. Add Classroom
2. Enroll Student
3. Schedule Assignment
4. Submit Assignment
5. List Classrooms
6. List Students in Class
0. Exit";

/// One interactive session bound to a registry.
pub struct Session<'a, R, W> {
    manager: &'a mut ClassroomManager,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(manager: &'a mut ClassroomManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
        }
    }

    /// Runs the menu loop until `0` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        info!("event=session_start module=cli status=ok");
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Select an option (0-6): ")? else {
                break;
            };

            match choice.parse::<u8>() {
                Ok(0) => {
                    writeln!(self.output, "Exiting. Goodbye!")?;
                    break;
                }
                Ok(1) => self.add_classroom()?,
                Ok(2) => self.enroll_student()?,
                Ok(3) => self.schedule_assignment()?,
                Ok(4) => self.submit_assignment()?,
                Ok(5) => self.list_classrooms()?,
                Ok(6) => self.list_students_in_class()?,
                Ok(other) => {
                    writeln!(self.output, "Choice {other} is not valid. Please try again.")?;
                }
                Err(_) => {
                    error!("event=menu_input module=cli status=error input={choice}");
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a number from the menu."
                    )?;
                }
            }
        }
        self.output.flush()?;
        info!("event=session_end module=cli status=ok");
        Ok(())
    }

    /// Prints `label` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Reads every field in `labels`; `None` if input ended or any is empty.
    fn prompt_all<const N: usize>(
        &mut self,
        labels: [&str; N],
        missing: &str,
    ) -> io::Result<Option<[String; N]>> {
        let mut values: [String; N] = std::array::from_fn(|_| String::new());
        for (slot, label) in values.iter_mut().zip(labels) {
            match self.prompt(label)? {
                Some(value) => *slot = value,
                None => return Ok(None),
            }
        }
        if values.iter().any(String::is_empty) {
            writeln!(self.output, "{missing}")?;
            return Ok(None);
        }
        Ok(Some(values))
    }

    fn add_classroom(&mut self) -> io::Result<()> {
        let Some([name]) = self.prompt_all(
            ["Enter new classroom name: "],
            "Classroom name cannot be empty.",
        )?
        else {
            return Ok(());
        };

        match self.manager.add_classroom(&name) {
            Ok(()) => writeln!(self.output, "Classroom [{name}] has been created."),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    fn enroll_student(&mut self) -> io::Result<()> {
        let Some([id, name, class_name]) = self.prompt_all(
            [
                "Enter student ID (e.g., S001): ",
                "Enter student Name: ",
                "Enter classroom name to enroll in: ",
            ],
            "All fields are required for enrollment.",
        )?
        else {
            return Ok(());
        };

        match self.manager.enroll_student(&id, &name, &class_name) {
            Ok(EnrollOutcome::Enrolled) => writeln!(
                self.output,
                "Student [{id} - {name}] has been enrolled in [{class_name}]."
            ),
            Ok(EnrollOutcome::AlreadyEnrolled) => writeln!(
                self.output,
                "Student [{id}] is already enrolled in [{class_name}]."
            ),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    fn schedule_assignment(&mut self) -> io::Result<()> {
        let Some([class_name, assignment_name, kind]) = self.prompt_all(
            [
                "Enter classroom name: ",
                "Enter assignment name: ",
                "Enter assignment type (MCQ, ESSAY, PRACTICAL): ",
            ],
            "All assignment details are required.",
        )?
        else {
            return Ok(());
        };

        match self
            .manager
            .schedule_assignment(&class_name, &assignment_name, &kind)
        {
            Ok(kind) => writeln!(
                self.output,
                "Assignment for [{class_name}] has been scheduled: {}",
                kind.label()
            ),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    fn submit_assignment(&mut self) -> io::Result<()> {
        let Some([student_id, class_name, assignment_name]) = self.prompt_all(
            [
                "Enter student ID submitting: ",
                "Enter classroom name: ",
                "Enter assignment name submitting: ",
            ],
            "All submission fields are required.",
        )?
        else {
            return Ok(());
        };

        match self
            .manager
            .submit_assignment(&student_id, &class_name, &assignment_name)
        {
            Ok(_) => writeln!(
                self.output,
                "Assignment submitted by Student [{student_id}] in [{class_name}]."
            ),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    fn list_classrooms(&mut self) -> io::Result<()> {
        let classrooms = self.manager.list_classrooms();
        if classrooms.is_empty() {
            return writeln!(self.output, "No classrooms created yet.");
        }

        writeln!(self.output, "\n--- Active Classrooms ---")?;
        for row in classrooms {
            writeln!(self.output, "- {} ({} students)", row.name, row.student_count)?;
        }
        writeln!(self.output, "-------------------------")
    }

    fn list_students_in_class(&mut self) -> io::Result<()> {
        let Some([class_name]) = self.prompt_all(
            ["Enter classroom name to view students: "],
            "Classroom name is required.",
        )?
        else {
            return Ok(());
        };

        let students = match self.manager.list_students_in_class(&class_name) {
            Ok(students) => students,
            Err(err) => return writeln!(self.output, "Error: {err}"),
        };
        if students.is_empty() {
            return writeln!(self.output, "No students enrolled in [{class_name}].");
        }

        writeln!(self.output, "\n--- Students in [{class_name}] ---")?;
        for student in students {
            writeln!(self.output, "ID: {} | Name: {}", student.id, student.name)?;
        }
        writeln!(self.output, "-------------------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use classroom_core::ClassroomManager;
    use std::io::Cursor;

    fn run_script(manager: &mut ClassroomManager, script: &str) -> String {
        let mut output = Vec::new();
        Session::new(manager, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .expect("in-memory session should not fail");
        String::from_utf8(output).expect("session output should be UTF-8")
    }

    #[test]
    fn end_to_end_scenario_renders_results_and_errors() {
        let mut manager = ClassroomManager::new();
        let script = "1\nMath101\n\
                      2\nS1\nAnn\nMath101\n\
                      3\nMath101\nHW1\nmcq\n\
                      4\nS1\nMath101\nHW1\n\
                      6\nMath101\n\
                      4\nS1\nMath101\nHW1\n\
                      0\n";
        let output = run_script(&mut manager, script);

        assert!(output.contains("Classroom [Math101] has been created."));
        assert!(output.contains("Student [S1 - Ann] has been enrolled in [Math101]."));
        assert!(output.contains("has been scheduled: Multiple Choice Quiz"));
        assert!(output.contains("Assignment submitted by Student [S1] in [Math101]."));
        assert!(output.contains("ID: S1 | Name: Ann"));
        assert!(output.contains(
            "Error: Assignment 'HW1' not found or already submitted in class [Math101]."
        ));
        assert!(output.contains("Exiting. Goodbye!"));

        assert_eq!(manager.classroom_count(), 1);
        assert_eq!(manager.student_count(), 1);
    }

    #[test]
    fn errors_and_bad_input_keep_the_loop_running() {
        let mut manager = ClassroomManager::new();
        let script = "abc\n\
                      9\n\
                      1\nMath101\n\
                      1\nMath101\n\
                      3\nMath101\nHW1\nQUIZ\n\
                      2\nS1\n\nMath101\n\
                      6\nNope\n\
                      5\n";
        let output = run_script(&mut manager, script);

        assert!(output.contains("Invalid input. Please enter a number from the menu."));
        assert!(output.contains("Choice 9 is not valid."));
        assert!(output.contains("Error: Classroom [Math101] already exists."));
        assert!(output.contains("Error: invalid assignment type `QUIZ`"));
        assert!(output.contains("All fields are required for enrollment."));
        assert!(output.contains("Error: Classroom [Nope] not found."));
        assert!(output.contains("- Math101 (0 students)"));
        assert_eq!(manager.student_count(), 0);
    }

    #[test]
    fn empty_listings_report_empty_state() {
        let mut manager = ClassroomManager::new();
        let output = run_script(&mut manager, "5\n1\nEmpty\n6\nEmpty\n");

        assert!(output.contains("No classrooms created yet."));
        assert!(output.contains("No students enrolled in [Empty]."));
    }
}
