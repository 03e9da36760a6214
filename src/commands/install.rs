//! Install command implementation

use crate::catalog;
use crate::cli::{GlobalArgs, InstallArgs};
use crate::commands::helpers::{self, Session};
use crate::error::Result;
use crate::operations::{InstallFlow, InstallOperation};
use crate::platform::{self, Collaborators};
use crate::poller::{StatePoller, SystemClock};
use crate::progress::ProgressDisplay;

/// Run install command
pub fn run(globals: &GlobalArgs, args: InstallArgs) -> Result<i32> {
    let descriptor = catalog::lookup(&args.package)?;
    let overrides = helpers::overrides(globals, args.all_users, Some(&args.timing));
    let settings = helpers::load_settings(globals, &overrides)?;
    let session = Session::start(globals.verbose, &settings)?;

    let backend = platform::system()?;
    let progress = ProgressDisplay::new(1);
    let poller = StatePoller::new(settings.policy, SystemClock).with_observer(progress.poll_observer());
    let flow = InstallFlow::new(
        Collaborators::from_backend(&backend),
        &poller,
        &settings,
        &progress,
        session.cancel(),
    );

    let report = InstallOperation::new(&flow, &progress).execute(descriptor);
    progress.finish();

    session.finish(&report)
}
