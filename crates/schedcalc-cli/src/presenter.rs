//! CLI session presenter.

use schedcalc_core::{Advisory, Key, Snapshot};

use crate::output::{format_grouped, format_snapshot, format_step, snapshot_json};
use crate::ui::{print_advisory, print_header};

/// Presents a scripted calculator session to the user.
pub trait SessionPresenter {
    /// Present the state after one key of the script.
    fn present_step(&self, index: usize, key: Key, snapshot: &Snapshot);

    /// Present an advisory raised by a key.
    fn present_advisory(&self, advisory: &Advisory);

    /// Present the final state of the session.
    fn present_final(&self, snapshot: &Snapshot);
}

/// CLI presenter writing to stdout, advisories to stderr.
pub struct CLIPresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl CLIPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        Self {
            verbose,
            quiet,
            json,
        }
    }
}

impl SessionPresenter for CLIPresenter {
    fn present_step(&self, index: usize, key: Key, snapshot: &Snapshot) {
        if self.verbose && !self.quiet && !self.json {
            println!("{}", format_step(index, key, snapshot));
        }
    }

    fn present_advisory(&self, advisory: &Advisory) {
        tracing::debug!(title = %advisory.title, "advisory presented");
        if !self.quiet {
            print_advisory(advisory);
        }
    }

    fn present_final(&self, snapshot: &Snapshot) {
        if self.json {
            match snapshot_json(snapshot) {
                Ok(json) => println!("{json}"),
                Err(err) => tracing::error!(%err, "failed to serialize snapshot"),
            }
            return;
        }

        if self.quiet {
            println!("{}", snapshot.display);
            return;
        }

        print_header("ScheduleCrunch");
        println!("{}", format_snapshot(snapshot));
        if self.verbose && !snapshot.is_error() {
            println!("Grouped: {}", format_grouped(&snapshot.display));
        }
    }
}
