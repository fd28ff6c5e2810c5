use biblio_common::config::Config;
use biblio_common::records::Student;
use biblio_core::Library;

use crate::commands::StudentCommand;
use crate::terminal::{format, print};

pub fn student(command: StudentCommand, library: &mut Library, cfg: &Config) -> biblio_common::Result<()> {
    match command {
        StudentCommand::Add { name, email, course } => {
            let student = Student::new(&name, &email, course)?;
            library.insert_student(&student)?;
            print::print_status(format!("Registered {student}"));
        }
        StudentCommand::Find { email } => {
            match library.search_student(&Student::probe(&email)?) {
                Some(student) => print_students(&[student], cfg),
                None => print::no_results("student"),
            }
        }
        StudentCommand::Remove { email } => {
            library.delete_student(&Student::probe(&email)?)?;
            print::print_status(format!("Removed student {email}"));
        }
        StudentCommand::List => {
            let students = library.students();
            print::header("students", cfg.quiet);
            print_students(&students, cfg);
            print::summary(students.len(), "student", cfg);
        }
    }
    Ok(())
}

fn print_students(students: &[Student], cfg: &Config) {
    if students.is_empty() {
        print::no_results("students");
        return;
    }
    if cfg.quiet > 1 {
        return;
    }

    for (idx, student) in students.iter().enumerate() {
        print::tree_head(idx, student.name());
        print::as_tree_one_level(format::student_to_details(student));
    }
}
