use classroom_core::{
    Assignment, AssignmentKind, ClassroomManager, NotificationObserver, NotificationSubject,
    ObserverSet, Student, Teacher,
};
use std::cell::RefCell;
use std::rc::Rc;

type Journal = Rc<RefCell<Vec<String>>>;

struct Recorder {
    name: String,
    journal: Journal,
}

impl NotificationObserver for Recorder {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, message: &str) {
        self.journal
            .borrow_mut()
            .push(format!("{} <- {message}", self.name));
    }
}

/// Detaches `victim` from `observers` the first time it is notified.
struct Detacher {
    observers: ObserverSet,
    victim: RefCell<Option<Rc<dyn NotificationObserver>>>,
}

impl NotificationObserver for Detacher {
    fn name(&self) -> &str {
        "detacher"
    }

    fn update(&self, _message: &str) {
        if let Some(victim) = self.victim.borrow_mut().take() {
            self.observers.detach(&victim);
        }
    }
}

fn recorder(name: &str, journal: &Journal) -> Rc<dyn NotificationObserver> {
    Rc::new(Recorder {
        name: name.to_string(),
        journal: Rc::clone(journal),
    })
}

#[test]
fn fan_out_follows_attachment_order_with_identical_message() {
    let journal: Journal = Rc::new(RefCell::new(Vec::new()));
    let mut manager = ClassroomManager::with_default_observers(vec![
        recorder("A", &journal),
        recorder("B", &journal),
    ]);
    manager.add_classroom("Math101").unwrap();
    manager.enroll_student("S1", "Ann", "Math101").unwrap();
    manager.schedule_assignment("Math101", "HW1", "MCQ").unwrap();
    manager.submit_assignment("S1", "Math101", "HW1").unwrap();

    let expected = "Assignment 'HW1' submitted by Student [S1] in class Math101.";
    assert_eq!(
        *journal.borrow(),
        vec![format!("A <- {expected}"), format!("B <- {expected}")]
    );
}

#[test]
fn detach_during_pass_does_not_skip_current_but_affects_next() {
    let journal: Journal = Rc::new(RefCell::new(Vec::new()));
    let mut student = Student::new("S1", "Ann");
    let victim = recorder("victim", &journal);
    let detacher: Rc<dyn NotificationObserver> = Rc::new(Detacher {
        observers: student.observers(),
        victim: RefCell::new(Some(Rc::clone(&victim))),
    });

    student.attach(detacher);
    student.attach(Rc::clone(&victim));
    assert_eq!(student.observers().len(), 2);

    let mut first = Assignment::new("HW1", "Math101", AssignmentKind::Mcq);
    student.submit_assignment(&mut first);
    assert_eq!(journal.borrow().len(), 1);
    assert_eq!(student.observers().len(), 1);

    let mut second = Assignment::new("HW2", "Math101", AssignmentKind::Mcq);
    student.submit_assignment(&mut second);
    assert_eq!(journal.borrow().len(), 1);
    assert_eq!(student.submitted_assignments().len(), 2);
}

#[test]
fn detaching_unattached_observer_never_fails() {
    let student = Student::new("S1", "Ann");
    let teacher: Rc<dyn NotificationObserver> = Rc::new(Teacher::new("Nobody"));
    assert!(!student.detach(&teacher));
    student.notify_observers("no one listening");
}

#[test]
fn one_teacher_hears_every_student() {
    let teacher = Rc::new(Teacher::new("Admin Teacher"));
    let observer: Rc<dyn NotificationObserver> = teacher.clone();
    let mut manager = ClassroomManager::with_default_observers(vec![observer]);
    manager.add_classroom("Bio").unwrap();
    manager.enroll_student("S1", "Ann", "Bio").unwrap();
    manager.enroll_student("S2", "Bo", "Bio").unwrap();
    manager.schedule_assignment("Bio", "Lab", "PRACTICAL").unwrap();
    manager.schedule_assignment("Bio", "Lab", "PRACTICAL").unwrap();

    manager.submit_assignment("S2", "Bio", "Lab").unwrap();
    manager.submit_assignment("S1", "Bio", "Lab").unwrap();

    assert_eq!(
        teacher.received(),
        vec![
            "Assignment 'Lab' submitted by Student [S2] in class Bio.".to_string(),
            "Assignment 'Lab' submitted by Student [S1] in class Bio.".to_string(),
        ]
    );
}
