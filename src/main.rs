// SPDX-FileCopyrightText: 2026 Fastflow Authors
// SPDX-License-Identifier: LicenseRef-Fastflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fastflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fastflow CLI entrypoint.
//!
//! By default this lands on the guide screen; press Enter there to start
//! editing. `--skip-guide` opens the editor directly.

use std::error::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--skip-guide]\n\nStarts the keyboard-only flow chart editor.\n--skip-guide opens the editor immediately instead of the guide screen."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    skip_guide: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--skip-guide" => {
                if options.skip_guide {
                    return Err(());
                }
                options.skip_guide = true;
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "fastflow".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.skip_guide {
            fastflow::tui::run_skip_guide()
        } else {
            fastflow::tui::run()
        }
    })();

    if let Err(err) = result {
        eprintln!("fastflow: {err}");
        std::process::exit(1);
    }
}
