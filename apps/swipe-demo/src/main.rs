mod script;

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};
use mailrow_core::Runtime;
use mailrow_foundation::{DragSample, HapticFeedback};
use mailrow_swipe::{presets, SwipeActions, SwipeCommitController};

const FRAME: Duration = Duration::from_millis(16);

struct Message {
    sender: &'static str,
    subject: &'static str,
}

const INBOX: &[Message] = &[
    Message {
        sender: "Ada",
        subject: "Quarterly numbers",
    },
    Message {
        sender: "Grace",
        subject: "Compiler meetup",
    },
    Message {
        sender: "Linus",
        subject: "Re: patch v3",
    },
];

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn row_controller(
    index: usize,
    runtime: &Runtime,
    journal: &Rc<RefCell<Vec<String>>>,
) -> SwipeCommitController {
    let subject = INBOX[index].subject;
    let archive = {
        let journal = Rc::clone(journal);
        move || {
            log::info!("archive {subject:?}");
            journal.borrow_mut().push(format!("archived {subject:?}"));
        }
    };
    let trash = {
        let journal = Rc::clone(journal);
        move || {
            log::info!("trash {subject:?}");
            journal.borrow_mut().push(format!("trashed {subject:?}"));
        }
    };
    let haptics = Rc::new(move |feedback: HapticFeedback| {
        log::debug!("row {index}: haptic {feedback:?}");
    });
    SwipeCommitController::new(
        SwipeActions::both(presets::archive(archive), presets::trash(trash)),
        haptics,
        runtime.handle(),
    )
}

/// Runs frames until every pending commit has fired.
fn drain(runtime: &Runtime) {
    while runtime.has_pending_timers() {
        thread::sleep(FRAME);
        runtime.run_due_timers();
    }
}

fn main() -> Result<()> {
    init_logging();

    let source = std::env::var("MAILROW_SCRIPT").unwrap_or_else(|_| script::DEFAULT_SCRIPT.into());
    let gestures = script::parse(&source)?;

    let runtime = mailrow_runtime_std::std_runtime();
    let journal = Rc::new(RefCell::new(Vec::new()));
    let rows: Vec<SwipeCommitController> = (0..INBOX.len())
        .map(|index| row_controller(index, &runtime, &journal))
        .collect();

    println!("=== mailrow swipe demo ===");
    for (index, message) in INBOX.iter().enumerate() {
        println!("  [{index}] {:<6} {}", message.sender, message.subject);
    }
    println!();

    for gesture in &gestures {
        let Some(row) = rows.get(gesture.row) else {
            bail!("gesture targets row {} but the inbox has {}", gesture.row, rows.len());
        };
        for &dx in &gesture.frames {
            row.on_drag_changed(DragSample::horizontal(dx));
            let indicator = row.indicator();
            println!(
                "  row {} dx {:>7.1} -> offset {:>6.1} {:?}",
                gesture.row, dx, indicator.offset, indicator.phase
            );
            thread::sleep(FRAME);
            runtime.run_due_timers();
        }
        row.on_drag_ended(gesture.release_dx());
        drain(&runtime);
    }

    println!();
    for entry in journal.borrow().iter() {
        println!("  {entry}");
    }
    Ok(())
}
