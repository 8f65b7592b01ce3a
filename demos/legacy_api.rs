use std::collections::VecDeque;

use not_null::{assume_not_null, check_not_null, NotNull, NullContractViolation};

struct Task {
    name: &'static str,
}

#[derive(Default)]
struct Queue {
    tasks: VecDeque<Box<Task>>,
}

impl Queue {
    fn post(&mut self, task: NotNull<Option<Box<Task>>>) {
        // hand the box to the internal storage, which has no use for the wrapper
        if let Some(task) = task.into_nullable() {
            self.tasks.push_back(task);
        }
    }

    /// Entry point for callers that may still pass "no task".
    fn post_legacy(&mut self, task: Option<Box<Task>>) -> Result<(), NullContractViolation> {
        self.post(check_not_null(task)?);
        Ok(())
    }
}

pub fn main() {
    let mut queue = Queue::default();

    // `Box::new` never returns null
    queue.post(unsafe { assume_not_null(Some(Box::new(Task { name: "first" }))) });

    for task in [Some(Box::new(Task { name: "second" })), None] {
        match queue.post_legacy(task) {
            Ok(()) => println!("Posted task"),
            Err(error) => println!("Rejected task: {}", error),
        }
    }

    for task in &queue.tasks {
        println!("Queued {}", task.name);
    }
}
