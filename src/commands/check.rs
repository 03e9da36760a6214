//! Check command implementation

use crate::catalog;
use crate::cli::{CheckArgs, GlobalArgs};
use crate::commands::helpers;
use crate::error::Result;
use crate::logging;
use crate::operations::check;
use crate::report::display;

/// Run check command
pub fn run(globals: &GlobalArgs, args: CheckArgs) -> Result<i32> {
    let targets = catalog::resolve_targets(&args.packages)?;
    let settings = helpers::load_settings(globals, &helpers::overrides(globals, false, None))?;
    let _log = logging::init(globals.verbose, None)?;

    let report = check::execute(&targets, &settings.install_root);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&check::entries(&report))?);
    } else {
        println!("Install root: {}", settings.install_root.display());
        println!();
        for run in &report.runs {
            println!("{}", display::validation_line(&run.descriptor, &run.final_state));
        }
    }

    Ok(report.exit_code())
}
